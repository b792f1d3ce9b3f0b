use chrono::{Datelike, NaiveDate};

use crate::models::Profile;

pub const SYSTEM_INSTRUCTION: &str =
    "You are a user on a dating app. Judge naturally and realistically, the way a real person would.";

/// Used when a birth date is missing or unparseable.
pub const FALLBACK_AGE: i32 = 25;

/// Age in whole years as of `today`. Expects `YYYY-MM-DD`.
pub fn age_from_birth_date(birth_date: Option<&str>, today: NaiveDate) -> i32 {
    let Some(raw) = birth_date else {
        return FALLBACK_AGE;
    };
    let Ok(born) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") else {
        return FALLBACK_AGE;
    };
    let mut age = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        age -= 1;
    }
    age
}

/// Interest/trait columns hold either a JSON array of strings or a
/// JSON-encoded string of one. Anything else degrades to an empty list.
pub fn normalize_string_list(value: &serde_json::Value) -> Vec<String> {
    let items = match value {
        serde_json::Value::Array(items) => items.clone(),
        serde_json::Value::String(raw) => match serde_json::from_str(raw) {
            Ok(serde_json::Value::Array(items)) => items,
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };
    items
        .into_iter()
        .filter_map(|item| match item {
            serde_json::Value::String(s) => Some(s),
            _ => None,
        })
        .collect()
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

fn text_or(value: Option<&str>, default: &str) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default.to_string(),
    }
}

/// The comparison prompt the persona answers: its own profile, the profile
/// of the person who sent the like, and the expected answer format.
pub fn build_prompt(persona: &Profile, target: &Profile, today: NaiveDate) -> String {
    let persona_age = age_from_birth_date(persona.birth_date.as_deref(), today);
    let target_age = age_from_birth_date(target.birth_date.as_deref(), today);
    let persona_interests = join_or_none(&normalize_string_list(&persona.interests));
    let target_interests = join_or_none(&normalize_string_list(&target.interests));
    let target_traits = normalize_string_list(&target.personality_traits);

    let mut prompt = format!(
        "You are \"{}\", a user on a dating app.\n\n\
         **Your profile:**\n\
         - Age: {}\n\
         - Gender: {}\n\
         - Bio: {}\n\
         - Interests: {}\n\n\
         **The person who liked you:**\n\
         - Name: {}\n\
         - Age: {}\n\
         - Gender: {}\n\
         - Bio: {}\n\
         - Interests: {}\n",
        persona.nickname,
        persona_age,
        text_or(persona.gender.as_deref(), "unknown"),
        text_or(persona.bio.as_deref(), "none"),
        persona_interests,
        target.nickname,
        target_age,
        text_or(target.gender.as_deref(), "unknown"),
        text_or(target.bio.as_deref(), "none"),
        target_interests,
    );

    if let Some(location) = target.location.as_deref().filter(|s| !s.is_empty()) {
        prompt.push_str(&format!("- Location: {location}\n"));
    }
    if let Some(job) = target.job_category.as_deref().filter(|s| !s.is_empty()) {
        prompt.push_str(&format!("- Job: {job}\n"));
    }
    if !target_traits.is_empty() {
        prompt.push_str(&format!("- Personality: {}\n", target_traits.join(", ")));
    }

    prompt.push_str(
        "\n**Question:**\n\
         This person sent you a like. Considering your own profile, interests, \
         age and gender, decide whether to show interest back.\n\n\
         Answer in this format:\n\
         Decision: LIKE or PASS\n\
         Reason: (one or two short sentences)\n\n\
         Make a natural, realistic judgment.\n",
    );

    prompt
}
