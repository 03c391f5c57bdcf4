use super::*;

#[test]
fn method_tones_follow_verb_semantics() {
    assert_eq!(HttpMethod::Get.tone(), Tone::Success);
    assert_eq!(HttpMethod::Post.tone(), Tone::Info);
    assert_eq!(HttpMethod::Put.tone(), Tone::Warning);
    assert_eq!(HttpMethod::Patch.tone(), Tone::Primary);
    assert_eq!(HttpMethod::Delete.tone(), Tone::Error);
}

#[test]
fn method_display_is_uppercase_verb() {
    assert_eq!(HttpMethod::Get.to_string(), "GET");
    assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    assert_eq!(format!("{} /x", HttpMethod::Patch), "PATCH /x");
}

#[test]
fn status_tone_marks_ok_and_failures() {
    assert_eq!(status_tone("200"), Tone::Success);
    assert_eq!(status_tone("404"), Tone::Error);
    assert_eq!(status_tone("503"), Tone::Error);
}

#[test]
fn status_tone_defaults_to_info() {
    assert_eq!(status_tone("201"), Tone::Info);
    assert_eq!(status_tone("301"), Tone::Info);
    assert_eq!(status_tone(""), Tone::Info);
}

#[test]
fn badge_class_embeds_modifier() {
    for tone in [
        Tone::Success,
        Tone::Error,
        Tone::Warning,
        Tone::Info,
        Tone::Primary,
        Tone::Secondary,
        Tone::Accent,
        Tone::Dark,
    ] {
        assert_eq!(tone.badge_class(), format!("badge badge--{}", tone.modifier()));
    }
}
