use std::collections::HashMap;
use std::sync::Mutex;

/// Process-lifetime answer store keyed by (business name, exact question
/// text). Keys are never normalized and entries are never evicted.
#[derive(Default)]
pub struct AnswerCache {
    entries: Mutex<HashMap<(String, String), String>>,
}

impl AnswerCache {
    pub fn get(&self, business_name: &str, question: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap();
        entries
            .get(&(business_name.to_string(), question.to_string()))
            .cloned()
    }

    pub fn insert(&self, business_name: String, question: String, answer: String) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert((business_name, question), answer);
    }
}

#[cfg(test)]
mod tests {
    use super::AnswerCache;

    #[test]
    fn stores_and_returns_answers() {
        let cache = AnswerCache::default();
        assert_eq!(cache.get("Acme", "who?"), None);

        cache.insert("Acme".to_string(), "who?".to_string(), "a widget shop".to_string());
        assert_eq!(cache.get("Acme", "who?"), Some("a widget shop".to_string()));
    }

    #[test]
    fn keys_are_case_and_whitespace_sensitive() {
        let cache = AnswerCache::default();
        cache.insert("Acme".to_string(), "who?".to_string(), "answer".to_string());

        assert_eq!(cache.get("Acme", "Who?"), None);
        assert_eq!(cache.get("Acme", " who?"), None);
        assert_eq!(cache.get("acme", "who?"), None);
    }

    #[test]
    fn same_question_for_different_businesses_is_distinct() {
        let cache = AnswerCache::default();
        cache.insert("Acme".to_string(), "who?".to_string(), "widgets".to_string());
        cache.insert("Globex".to_string(), "who?".to_string(), "gadgets".to_string());

        assert_eq!(cache.get("Acme", "who?"), Some("widgets".to_string()));
        assert_eq!(cache.get("Globex", "who?"), Some("gadgets".to_string()));
    }
}
