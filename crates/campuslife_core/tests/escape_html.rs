use campuslife_core::escape_html;

#[test]
fn escapes_script_tags_and_special_characters() {
    let input = r#"<script>alert("xss")</script>&"'<"#;
    let result = escape_html(input);

    assert_eq!(
        result,
        "&lt;script&gt;alert(&quot;xss&quot;)&lt;/script&gt;&amp;&quot;&#039;&lt;"
    );
    assert!(!result.contains("<script>"));
}

#[test]
fn returns_normal_text_unchanged() {
    let input = "Hello Campus Life!";
    assert_eq!(escape_html(input), input);
}

#[test]
fn output_never_contains_raw_markup_characters() {
    let inputs = [
        "a & b",
        "<<>>",
        "it's \"quoted\"",
        "&amp; already escaped",
        "mixed <b>'&'</b>",
    ];

    for input in inputs {
        let escaped = escape_html(input);
        let without_entities = escaped
            .replace("&amp;", "")
            .replace("&lt;", "")
            .replace("&gt;", "")
            .replace("&quot;", "")
            .replace("&#039;", "");
        for forbidden in ['&', '<', '>', '"', '\''] {
            assert!(
                !without_entities.contains(forbidden),
                "`{forbidden}` leaked from {input:?} -> {escaped:?}"
            );
        }
    }
}

#[test]
fn escaping_is_not_idempotent() {
    assert_eq!(escape_html(escape_html("&")), "&amp;amp;");
}
