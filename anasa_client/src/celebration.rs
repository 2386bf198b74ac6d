//! Confetti effects played after a successful submission.
//!
//! A [`Celebration`] only describes the effect. Rendering it (and picking
//! random positions inside the origin ranges) is up to the [`Feedback`]
//! implementation.
//!
//! [`Feedback`]: crate::feedback::Feedback

use std::{ops::Range, time::Duration};

/// Brand colors of the contact section.
pub const CONTACT_COLORS: &[&str] = &["#bfd7ed", "#60a3d9", "#0074b7", "#003b73"];

const CONTACT_DURATION: Duration = Duration::from_millis(3000);
const CONTACT_INTERVAL: Duration = Duration::from_millis(250);
const CONTACT_MAX_PARTICLES: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Celebration {
    pub bursts: Vec<Burst>,
}

/// A single confetti burst.
#[derive(Debug, Clone, PartialEq)]
pub struct Burst {
    /// Time after the start of the celebration at which the burst is fired.
    pub delay: Duration,
    pub particle_count: u32,
    /// Spread angle in degrees.
    pub spread: u32,
    pub start_velocity: Option<u32>,
    /// Number of animation frames the particles live for.
    pub ticks: Option<u32>,
    /// Horizontal origin, relative to the viewport width.
    pub origin_x: Range<f64>,
    /// Vertical origin, relative to the viewport height.
    pub origin_y: Range<f64>,
    /// Empty means the default palette of the renderer.
    pub colors: &'static [&'static str],
}

impl Celebration {
    /// Two side bursts every 250ms for 3s, fading out linearly.
    pub fn contact() -> Self {
        let duration = CONTACT_DURATION.as_secs_f64();
        let bursts = (1..)
            .map(|n| CONTACT_INTERVAL * n)
            .take_while(|&delay| delay < CONTACT_DURATION)
            .flat_map(|delay| {
                let time_left = duration - delay.as_secs_f64();
                let particle_count = (CONTACT_MAX_PARTICLES * time_left / duration).round() as u32;
                [0.1..0.3, 0.7..0.9].map(|origin_x| Burst {
                    delay,
                    particle_count,
                    spread: 360,
                    start_velocity: Some(30),
                    ticks: Some(60),
                    origin_x,
                    origin_y: -0.2..0.8,
                    colors: CONTACT_COLORS,
                })
            })
            .collect();

        Self { bursts }
    }

    /// One burst from each edge of the screen.
    pub fn newsletter() -> Self {
        let bursts = [0.0, 1.0]
            .map(|x| Burst {
                delay: Duration::ZERO,
                particle_count: 100,
                spread: 70,
                start_velocity: None,
                ticks: None,
                origin_x: x..x,
                origin_y: 0.8..0.8,
                colors: &[],
            })
            .into();

        Self { bursts }
    }

    /// Time until the last burst is fired.
    pub fn duration(&self) -> Duration {
        self.bursts
            .iter()
            .map(|burst| burst.delay)
            .max()
            .unwrap_or_default()
    }
}
