use serde::Deserialize;

use super::Render;
use super::common::{Text, text};
use crate::html::{element, header};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct FaqProps {
    title: Option<Text>,
    subtitle: Option<Text>,
    items: Vec<FaqItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FaqItem {
    #[serde(alias = "q")]
    question: Option<Text>,
    #[serde(alias = "a")]
    answer: Option<Text>,
}

impl Render for FaqProps {
    fn render(&self, out: &mut String) {
        header(out, text(self.title.as_ref()), text(self.subtitle.as_ref()), None);
        for item in &self.items {
            let Some(question) = text(item.question.as_ref()) else {
                continue;
            };
            out.push_str(r#"<details class="faq-item">"#);
            element(out, "summary", None, Some(question));
            element(out, "p", None, text(item.answer.as_ref()));
            out.push_str("</details>");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_short_and_long_keys() {
        let props: FaqProps = serde_json::from_value(json!({
            "items": [
                {"q": "Short?", "a": "Yes"},
                {"question": "Long?", "answer": "Also yes"}
            ]
        }))
        .unwrap();
        let mut out = String::new();

        props.render(&mut out);

        assert_eq!(
            out,
            concat!(
                r#"<details class="faq-item"><summary>Short?</summary><p>Yes</p></details>"#,
                r#"<details class="faq-item"><summary>Long?</summary><p>Also yes</p></details>"#
            )
        );
    }

    #[test]
    fn test_items_without_question_are_skipped() {
        let props: FaqProps =
            serde_json::from_value(json!({"items": [{"answer": "orphan"}]})).unwrap();
        let mut out = String::new();

        props.render(&mut out);

        assert!(out.is_empty());
    }
}
