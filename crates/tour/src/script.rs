//! Fixed camera keyframes and narration for the two tour variants.

use solar_core::vector::Vector3;

use crate::TourKind;

/// A camera pose: where the camera sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Keyframe {
    pub position: Vector3,
    pub target: Vector3,
}

/// Narration shown while a phase plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct PhaseText {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PHASE_COUNT: usize = 5;

/// Text shown between `start` and the first frame step.
pub const INTRO: PhaseText = PhaseText {
    title: "Preparing",
    description: "We will move in slowly so you can clearly see how the Sun, the Moon and the \
                  Earth line up. This helps you understand why eclipses happen.",
};

const fn kf(position: Vector3, target: Vector3) -> Keyframe {
    Keyframe { position, target }
}

const SOLAR_KEYFRAMES: [Keyframe; PHASE_COUNT] = [
    kf([0.0, 20.0, 40.0], [0.0, 0.0, 0.0]),
    kf([25.0, 5.0, 0.0], [15.0, 0.0, 0.0]),
    kf([16.0, 2.0, 3.0], [15.0, 0.0, 0.0]),
    kf([14.0, 1.0, 1.0], [0.0, 0.0, 0.0]),
    kf([15.0, 8.0, 5.0], [15.0, 0.0, 0.0]),
];

// Totality looks back at Earth instead of the Sun.
const LUNAR_KEYFRAMES: [Keyframe; PHASE_COUNT] = [
    kf([0.0, 20.0, 40.0], [0.0, 0.0, 0.0]),
    kf([25.0, 5.0, 0.0], [15.0, 0.0, 0.0]),
    kf([16.0, 2.0, 3.0], [15.0, 0.0, 0.0]),
    kf([14.0, 1.0, 1.0], [15.0, 0.0, 0.0]),
    kf([15.0, 8.0, 5.0], [15.0, 0.0, 0.0]),
];

const SOLAR_TEXT: [PhaseText; PHASE_COUNT] = [
    PhaseText {
        title: "Phase 1: Getting Ready (Alignment)",
        description: "We start far away so you can watch the Sun, the Earth and the Moon line up. \
                      Think of them as three friends standing in a row: from our point of view \
                      they look perfect once aligned. This shows how a solar eclipse can happen.",
    },
    PhaseText {
        title: "Phase 2: First Contact (The Moon Approaches)",
        description: "The Moon now drifts slowly between the Earth and the Sun. The Sun starts to \
                      look slightly bitten, which is the Moon covering it. Take your time and \
                      watch the motion.",
    },
    PhaseText {
        title: "Phase 3: Approaching Totality (The Shadow Grows)",
        description: "The Moon's shadow stretches across the Earth. The light changes and things \
                      get darker, like clouds passing over the Sun. We move closer so you can \
                      feel the scale.",
    },
    PhaseText {
        title: "Phase 4: Total Solar Eclipse (The Corona)",
        description: "For a brief magical moment the Sun is hidden and we can see the corona, a \
                      beautiful glowing ring. It is one of the most striking sights in space. We \
                      slow down so you can enjoy every second.",
    },
    PhaseText {
        title: "Phase 5: The Shadow Passes (End)",
        description: "The Moon moves on and sunlight returns. The shadow sweeps away and \
                      everything goes back to normal. We pull back so you can see the whole \
                      scene again.",
    },
];

const LUNAR_TEXT: [PhaseText; PHASE_COUNT] = [
    PhaseText {
        title: "Phase 1: Getting Ready (Alignment)",
        description: "We start far away so you can watch the Sun, the Earth and the Moon line up. \
                      This time the Earth sits in the middle, blocking sunlight from reaching \
                      the Moon. This shows how a lunar eclipse can happen.",
    },
    PhaseText {
        title: "Phase 2: Entering Earth's Shadow (Penumbra)",
        description: "The Moon slowly slides into the Earth's shadow and starts to look a little \
                      darker. It does not disappear; it only dims as the Earth blocks the \
                      sunlight.",
    },
    PhaseText {
        title: "Phase 3: Deeper Shadow (Umbra Approaches)",
        description: "The Moon moves deeper into the Earth's shadow and becomes much darker, like \
                      standing in someone's shadow. We move closer so you can see how the Earth \
                      blocks direct sunlight completely.",
    },
    PhaseText {
        title: "Phase 4: Total Lunar Eclipse (Full Shadow)",
        description: "For a moment the Moon is entirely inside the Earth's shadow. Even with no \
                      direct sunlight, some light still reaches it after bending through the \
                      Earth's atmosphere, so we can still see it faintly.",
    },
    PhaseText {
        title: "Phase 5: Leaving the Shadow (End)",
        description: "The Moon leaves the Earth's shadow and returns to its normal bright colour. \
                      The shadow passes and everything goes back to normal. We pull back so you \
                      can see the whole scene again.",
    },
];

/// Keyframes for `kind`, indexed by phase.
pub fn keyframes(kind: TourKind) -> &'static [Keyframe; PHASE_COUNT] {
    match kind {
        TourKind::Solar => &SOLAR_KEYFRAMES,
        TourKind::Lunar => &LUNAR_KEYFRAMES,
    }
}

/// Narration for `kind`, indexed by phase.
pub fn narration(kind: TourKind) -> &'static [PhaseText; PHASE_COUNT] {
    match kind {
        TourKind::Solar => &SOLAR_TEXT,
        TourKind::Lunar => &LUNAR_TEXT,
    }
}
