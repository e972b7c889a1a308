//! Instruction prompt sent to the LLM for a company website.

/// Builds the enrichment prompt for `url` over the extracted `text`.
///
/// The model is asked for a bare JSON object with `summary`, `whatTheyDo`,
/// `keywords` and `derivedSignals`. Replies may still arrive inside a
/// ```` ```json ```` fence; [`strip_code_fence`](crate::normalize::strip_code_fence)
/// removes it.
pub fn build_prompt(url: &str, text: &str) -> String {
    format!(
        r#"
Analyze the following website content from {url}.
Extract the following structured information as a strict JSON object:
{{
  "summary": "1-2 sentence summary of the company",
  "whatTheyDo": ["3-6 short bullet points describing what they do"],
  "keywords": ["5-10 relevant industry or technology keywords"],
  "derivedSignals": ["2-4 inferred signals from the content, e.g., 'Hiring active (Careers page mentioned)', 'Enterprise focus', 'Recent product launch', 'Open source (GitHub links)'"]
}}

Website Content:
---
{text}
---

Respond ONLY with the raw JSON object, without any Markdown formatting, like ```json.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_url_and_text() {
        let prompt = build_prompt("https://acme.dev", "Acme builds rockets");
        assert!(prompt.contains("from https://acme.dev."));
        assert!(prompt.contains("---\nAcme builds rockets\n---"));
    }

    #[test]
    fn test_prompt_names_every_field() {
        let prompt = build_prompt("https://acme.dev", "");
        for field in ["\"summary\"", "\"whatTheyDo\"", "\"keywords\"", "\"derivedSignals\""] {
            assert!(prompt.contains(field), "missing {field}");
        }
        assert!(prompt.contains("without any Markdown formatting"));
    }

    #[test]
    fn test_prompt_does_not_interpret_braces_in_text() {
        let prompt = build_prompt("https://acme.dev", "{not: json}");
        assert!(prompt.contains("{not: json}"));
    }
}
