use serde::{Deserialize, Serialize};

use crate::models::locale::Locale;

/// One string per supported locale.
///
/// Every locale is a required field, so a catalog entry that forgets a
/// translation fails to deserialize instead of rendering an empty slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalizedText {
    pub vi: String,
    pub en: String,
}

impl LocalizedText {
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Vi => &self.vi,
            Locale::En => &self.en,
        }
    }

    /// `(locale, text)` pairs in `Locale::ALL` order.
    pub fn entries(&self) -> impl Iterator<Item = (Locale, &str)> + '_ {
        Locale::ALL.into_iter().map(move |l| (l, self.get(l)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub badge: String,
    /// Extra CSS class on the badge, e.g. `member-badge`.
    #[serde(default)]
    pub badge_variant: Option<String>,
    pub date_range: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub members: LocalizedText,
    pub result: LocalizedText,
    pub description: LocalizedText,
    /// Display order is significant.
    pub technologies: Vec<String>,
}

/// A bulleted line inside an education or activity card.
/// `text` is trusted catalog markup and may contain inline tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconLine {
    pub icon: String,
    pub text: LocalizedText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationRecord {
    pub icon: String,
    pub title: LocalizedText,
    pub period: String,
    pub details: Vec<IconLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub icon: String,
    pub title: LocalizedText,
    pub items: Vec<IconLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_text_get_per_locale() {
        let t = LocalizedText {
            vi: "3 thành viên".to_string(),
            en: "3 members".to_string(),
        };
        assert_eq!(t.get(Locale::Vi), "3 thành viên");
        assert_eq!(t.get(Locale::En), "3 members");
        let locales: Vec<_> = t.entries().map(|(l, _)| l).collect();
        assert_eq!(locales, Locale::ALL.to_vec());
    }

    #[test]
    fn test_localized_text_requires_every_locale() {
        let result: Result<LocalizedText, _> = serde_json::from_str(r#"{ "vi": "Xin chào" }"#);
        assert!(
            result.is_err(),
            "LocalizedText without an 'en' entry must fail deserialization"
        );
    }

    #[test]
    fn test_localized_text_rejects_unknown_locale() {
        let result: Result<LocalizedText, _> =
            serde_json::from_str(r#"{ "vi": "a", "en": "b", "fr": "c" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_project_optional_fields_default_to_none() {
        let json = serde_json::json!({
            "name": "One Pickleball",
            "badge": "Front-end Dev",
            "date_range": "11/2025",
            "members": { "vi": "3 thành viên", "en": "3 members" },
            "result": { "vi": "Kết quả: 80%", "en": "Result: 80%" },
            "description": { "vi": "mô tả", "en": "description" },
            "technologies": ["React Native", "Expo"]
        });
        let project: ProjectRecord = serde_json::from_value(json).unwrap();
        assert!(project.badge_variant.is_none());
        assert!(project.subtitle.is_none());
        assert_eq!(project.technologies, vec!["React Native", "Expo"]);
    }
}
