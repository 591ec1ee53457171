/*!
 * Tests for caption track classification
 */

use std::str::FromStr;
use vttknow::caption_track::{CaptionTrack, TrackKind};

/// Test tracks with an -orig suffix classify as manually uploaded
#[test]
fn test_classify_withOrigSuffix_shouldBeManual() {
    assert_eq!(TrackKind::classify("en-orig", true, "en"), TrackKind::Manual);
    assert_eq!(TrackKind::classify("de-orig", false, "en"), TrackKind::Manual);
}

/// Test non-automatic tracks classify as manually uploaded
#[test]
fn test_classify_withManualTrack_shouldBeManual() {
    assert_eq!(TrackKind::classify("fr", false, "en"), TrackKind::Manual);
}

/// Test an automatic track in the audio language is a transcription
#[test]
fn test_classify_withAudioLanguage_shouldBeAutoGenerated() {
    assert_eq!(TrackKind::classify("en", true, "en"), TrackKind::AutoGenerated);
    // Regional suffixes compare on the base code
    assert_eq!(TrackKind::classify("en-US", true, "en"), TrackKind::AutoGenerated);
}

/// Test an automatic track in another language is a translation
#[test]
fn test_classify_withOtherLanguage_shouldBeAutoTranslated() {
    assert_eq!(TrackKind::classify("de", true, "en"), TrackKind::AutoTranslated);
    assert_eq!(TrackKind::classify("ja", true, "en"), TrackKind::AutoTranslated);
}

/// Test display labels match the listing format
#[test]
fn test_display_label_shouldMatchListingFormat() {
    assert_eq!(TrackKind::Manual.display_label(), "[Original]");
    assert_eq!(TrackKind::AutoGenerated.display_label(), "[Auto]");
    assert_eq!(TrackKind::AutoTranslated.display_label(), "[Auto-Translate]");
}

/// Test string round-trip through Display and FromStr
#[test]
fn test_track_kind_roundtrip_shouldParseOwnDisplay() {
    for kind in [TrackKind::Manual, TrackKind::AutoGenerated, TrackKind::AutoTranslated] {
        let parsed = TrackKind::from_str(&kind.to_string()).unwrap();
        assert_eq!(parsed, kind);
    }
    assert!(TrackKind::from_str("bogus").is_err());
}

/// Test track construction classifies and formats for listings
#[test]
fn test_caption_track_new_shouldClassifyAndFormat() {
    let track = CaptionTrack::new("de", "Deutsch", true, "en");
    assert_eq!(track.kind, TrackKind::AutoTranslated);
    assert_eq!(track.to_string(), "de (Deutsch) [Auto-Translate]");
}
