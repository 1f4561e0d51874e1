// Host-side tests for the reveal policies and layout sampling.

use header_core::*;

fn sample(scroll_top: u32, viewport_height: u32, document_height: u32) -> ScrollSample {
    ScrollSample {
        scroll_top,
        viewport_height,
        document_height,
    }
}

#[test]
fn past_header_shows_above_header_in_either_direction() {
    let p = RevealPolicy::PastHeader;
    for st in 0..50u32 {
        // Moving down from the very top
        assert_eq!(
            p.decide(0, &ScrollSample::at(st), 50),
            Some(HeaderState::Visible)
        );
        // Moving up from far below
        assert_eq!(
            p.decide(1_000, &ScrollSample::at(st), 50),
            Some(HeaderState::Visible)
        );
    }
}

#[test]
fn past_header_shows_on_any_upward_move() {
    let p = RevealPolicy::PastHeader;
    assert_eq!(
        p.decide(900, &ScrollSample::at(600), 50),
        Some(HeaderState::Visible)
    );
}

#[test]
fn near_top_keeps_hidden_until_back_above_header() {
    let mut d = ScrollDetector::new(DetectorConfig {
        delta_px: 5,
        navbar_height_px: 50,
        policy: RevealPolicy::NearTop,
    });
    assert_eq!(
        d.evaluate(ScrollSample::at(100)).map(|t| t.to),
        Some(HeaderState::Hidden)
    );
    // Upward, but still below the header: stays hidden, offset is tracked
    assert!(d.evaluate(ScrollSample::at(60)).is_none());
    assert_eq!(d.state(), HeaderState::Hidden);
    assert_eq!(d.last_scroll_top(), 60);

    assert_eq!(
        d.evaluate(ScrollSample::at(20)).map(|t| t.to),
        Some(HeaderState::Visible)
    );
}

#[test]
fn near_top_hides_even_inside_header_band() {
    let p = RevealPolicy::NearTop;
    assert_eq!(
        p.decide(0, &ScrollSample::at(30), 50),
        Some(HeaderState::Hidden)
    );
}

#[test]
fn near_bottom_ignores_bounce_at_document_end() {
    let mut d = ScrollDetector::new(DetectorConfig {
        delta_px: 5,
        navbar_height_px: 50,
        policy: RevealPolicy::NearBottom,
    });
    assert_eq!(
        d.evaluate(sample(520, 500, 1_000)).map(|t| t.to),
        Some(HeaderState::Hidden)
    );
    // Settling back from overscroll still touches the end of the document
    assert!(d.evaluate(sample(505, 500, 1_000)).is_none());
    assert_eq!(d.state(), HeaderState::Hidden);

    assert_eq!(
        d.evaluate(sample(300, 500, 1_000)).map(|t| t.to),
        Some(HeaderState::Visible)
    );
}

#[test]
fn near_bottom_reveals_above_header_without_layout_heights() {
    let mut d = ScrollDetector::new(DetectorConfig {
        delta_px: 5,
        navbar_height_px: 50,
        policy: RevealPolicy::NearBottom,
    });
    assert_eq!(
        d.evaluate(ScrollSample::at(500)).map(|t| t.to),
        Some(HeaderState::Hidden)
    );
    // Viewport and document heights read as 0 (short page or failed reads)
    assert_eq!(
        d.evaluate(ScrollSample::at(10)).map(|t| t.to),
        Some(HeaderState::Visible)
    );
    assert_eq!(d.last_scroll_top(), 10);
}

#[test]
fn near_bottom_reveals_above_header_on_short_page() {
    let p = RevealPolicy::NearBottom;
    // The whole page fits in the viewport, so every offset touches the end
    assert_eq!(
        p.decide(80, &sample(20, 900, 600), 50),
        Some(HeaderState::Visible)
    );
    assert_eq!(p.decide(300, &sample(120, 900, 600), 50), None);
}

#[test]
fn policies_parse_from_names() {
    for p in RevealPolicy::ALL {
        assert_eq!(p.to_string().parse::<RevealPolicy>(), Ok(p));
    }
    assert_eq!(
        " Near-Bottom ".parse::<RevealPolicy>(),
        Ok(RevealPolicy::NearBottom)
    );
    let err = "sideways".parse::<RevealPolicy>().unwrap_err();
    assert_eq!(err, UnknownPolicy("sideways".to_string()));
    assert!(err.to_string().contains("past-header"));
}

#[test]
fn default_policy_is_past_header() {
    assert_eq!(RevealPolicy::default(), RevealPolicy::PastHeader);
    assert_eq!(constants::DEFAULT_POLICY, RevealPolicy::PastHeader);
}

#[test]
fn platform_readings_are_rounded_and_clamped() {
    let s = ScrollSample::from_platform(-12.0, 800.4, f64::NAN);
    assert_eq!(s, sample(0, 800, 0));

    let s = ScrollSample::from_platform(10.6, f64::INFINITY, 4_000.0);
    assert_eq!(s, sample(11, 0, 4_000));
}

#[test]
fn header_state_display() {
    assert_eq!(HeaderState::Visible.to_string(), "visible");
    assert_eq!(HeaderState::Hidden.to_string(), "hidden");
    assert!(HeaderState::Hidden.is_hidden());
    assert!(!HeaderState::default().is_hidden());
}
