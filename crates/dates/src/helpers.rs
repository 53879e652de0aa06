//! Template-helper registration and rendering.

use handlebars::{Handlebars, handlebars_helper};
use serde::Serialize;

use crate::error::DateError;
use crate::format::format_iso_str;
use crate::tokens::DateFormatToken;

handlebars_helper!(format_date_helper: |value: str, token: str| {
    apply(value, token)
});

fn apply(value: &str, token: &str) -> String {
    match token.parse::<DateFormatToken>() {
        Ok(token) => format_iso_str(value, token).unwrap_or_else(|e| e.to_string()),
        Err(e) => e.to_string(),
    }
}

/// Install the date-formatting helpers into a handlebars registry.
///
/// Temporal values reach templates in their serialized ISO form, so
/// `format_date` and `format_iso_date_str` share one string-in
/// implementation.
pub fn register_helpers(hb: &mut Handlebars<'_>) {
    hb.register_helper("format_date", Box::new(format_date_helper));
    hb.register_helper("format_iso_date_str", Box::new(format_date_helper));
}

/// Render a registered template with the given data.
pub fn render_template<T: Serialize>(
    hb: &Handlebars<'_>,
    name: &str,
    data: &T,
) -> Result<String, DateError> {
    hb.render(name, data).map_err(|e| DateError::render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> Handlebars<'static> {
        let mut hb = Handlebars::new();
        register_helpers(&mut hb);
        hb
    }

    #[test]
    fn helpers_format_iso_strings_inside_templates() {
        let mut hb = registry();
        hb.register_template_string("due", "Due {{format_iso_date_str due token}}")
            .unwrap();

        let html = render_template(
            &hb,
            "due",
            &json!({"due": "2023-02-07T14:05:26", "token": "iso_date"}),
        )
        .unwrap();
        assert_eq!(html, "Due 2023-02-07");
    }

    #[test]
    fn both_helper_names_are_registered() {
        let mut hb = registry();
        hb.register_template_string("t", "{{format_date d token}}")
            .unwrap();

        let html = render_template(&hb, "t", &json!({"d": "2022-07-26", "token": "day_of_week"}))
            .unwrap();
        assert_eq!(html, "Tue");
    }

    #[test]
    fn bad_token_names_render_as_error_text() {
        let mut hb = registry();
        hb.register_template_string("t", "{{format_date d token}}")
            .unwrap();

        let html = render_template(&hb, "t", &json!({"d": "2022-07-26", "token": "sundial"}))
            .unwrap();
        assert!(html.contains("unknown date format token"));
    }

    #[test]
    fn rendering_an_unknown_template_fails() {
        let hb = registry();
        let err = render_template(&hb, "missing", &json!({})).unwrap_err();
        assert!(matches!(err, DateError::Render(_)));
    }
}
