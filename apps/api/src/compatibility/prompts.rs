// Prompt constants for the compatibility check.
// Caller data is appended after the fixed block, never substituted into it.

use crate::compatibility::models::CompatibilityRequest;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Role and reply schema. Identical for every request.
pub const COMPATIBILITY_INSTRUCTIONS: &str = r#"You are an AI assistant aiding a medical doctor. The doctor is checking for harmful interactions between the medications listed below.
Analyze the medications and respond with this EXACT JSON schema:
{
  "compatible": true or false,
  "conflictingMedicine": "Name of the conflicting medicine and the medicine it conflicts with, if harmful",
  "complication": "Primary complication in 1 or 2 words, if harmful",
  "alternatives": ["Alternative medicines that would not cause an interaction"]
}

Rules:
1. Set "compatible" to true if the new medicine is compatible with all of the current medicines.
2. If there is a conflict, set "compatible" to false, name the conflicting medicine in "conflictingMedicine", give the primary complication in 1 or 2 words in "complication", and list alternative medicines that can be safely prescribed in "alternatives".
3. If the new medicine is not a real medicine, set "compatible" to false and add "errorNotAMedicine": "No valid medicine" instead of "conflictingMedicine" and "complication"."#;

/// Renders the full prompt for one request. Deterministic: the same request
/// always produces the same bytes.
pub fn build_compatibility_prompt(request: &CompatibilityRequest) -> String {
    let current = if request.medicines_list.is_empty() {
        "none".to_string()
    } else {
        request.medicines_list.join(", ")
    };

    let mut prompt = String::with_capacity(
        COMPATIBILITY_INSTRUCTIONS.len() + JSON_ONLY_INSTRUCTION.len() + current.len() + 160,
    );
    prompt.push_str(COMPATIBILITY_INSTRUCTIONS);
    prompt.push_str("\n\n");
    prompt.push_str(JSON_ONLY_INSTRUCTION);
    prompt.push_str("\n\nThe list of medicines currently prescribed includes: ");
    prompt.push_str(&current);
    prompt.push_str(".\nThe doctor wants to prescribe a new medicine: ");
    prompt.push_str(&request.new_medicine);
    prompt.push('.');
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(list: &[&str], new: &str) -> CompatibilityRequest {
        CompatibilityRequest {
            medicines_list: list.iter().map(|s| s.to_string()).collect(),
            new_medicine: new.to_string(),
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let req = request(&["Warfarin", "Metformin"], "Aspirin");
        let first = build_compatibility_prompt(&req);
        let second = build_compatibility_prompt(&req.clone());
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_prompt_is_deterministic_across_threads() {
        let req = request(&["Warfarin"], "Aspirin");
        let expected = build_compatibility_prompt(&req);
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let req = req.clone();
                std::thread::spawn(move || build_compatibility_prompt(&req))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn test_prompt_tail_golden() {
        let prompt = build_compatibility_prompt(&request(&["Warfarin", "Metformin"], "Aspirin"));
        assert!(prompt.starts_with(COMPATIBILITY_INSTRUCTIONS));
        assert!(prompt.ends_with(
            "\n\nThe list of medicines currently prescribed includes: Warfarin, Metformin.\n\
             The doctor wants to prescribe a new medicine: Aspirin."
        ));
    }

    #[test]
    fn test_prompt_embeds_schema_keys() {
        let prompt = build_compatibility_prompt(&request(&[], "Ibuprofen"));
        for key in [
            "\"compatible\"",
            "\"conflictingMedicine\"",
            "\"complication\"",
            "\"alternatives\"",
            "\"errorNotAMedicine\"",
        ] {
            assert!(prompt.contains(key), "prompt missing {key}");
        }
        assert!(prompt.contains("1 or 2 words"));
        assert!(prompt.contains(JSON_ONLY_INSTRUCTION));
    }

    #[test]
    fn test_empty_list_renders_none() {
        let prompt = build_compatibility_prompt(&request(&[], "Ibuprofen"));
        assert!(prompt.contains("currently prescribed includes: none.\n"));
    }

    #[test]
    fn test_list_order_is_preserved() {
        let a = build_compatibility_prompt(&request(&["A", "B"], "C"));
        let b = build_compatibility_prompt(&request(&["B", "A"], "C"));
        assert!(a.contains("includes: A, B."));
        assert!(b.contains("includes: B, A."));
        assert_ne!(a, b);
    }
}
