//! Plays back a [`Traversal`] one value at a time.
//!
//! An [`Animator`] is either idle or playing exactly one traversal. Asking it to start another
//! one while it's playing is refused with [`AnimatorError::Busy`]; the running playback carries
//! on untouched and nothing is queued. Once started, a playback always runs to the end.
//!
//! The animator itself has no notion of time: every [`Animator::tick`] moves to the next value.
//! [`Player`] drives the ticks at a fixed interval.
//!
//! # Examples
//!
//! ```
//! use bst::animator::{Animator, AnimatorError, Frame};
//! use bst::traversal::Order;
//! use bst::tree::Tree;
//!
//! let tree = Tree::from_values(vec![1, 2, 3]);
//! let mut animator = Animator::new();
//!
//! animator.start(Order::Pre.traverse(&tree)).unwrap();
//! assert!(matches!(
//!     animator.start(Order::In.traverse(&tree)),
//!     Err(AnimatorError::Busy { .. })
//! ));
//!
//! assert_eq!(animator.tick(), Some(Frame::Highlight { step: 0, value: 2 }));
//! assert_eq!(animator.tick(), Some(Frame::Highlight { step: 1, value: 1 }));
//! assert_eq!(animator.tick(), Some(Frame::Highlight { step: 2, value: 3 }));
//! assert_eq!(animator.tick(), Some(Frame::Finished));
//! assert!(animator.is_idle());
//! ```

use std::thread;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::traversal::{Order, Traversal};

/// How long each value stays highlighted unless configured otherwise.
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(1000);

/// Why a playback couldn't be started.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnimatorError {
    /// Another traversal is still being played.
    #[error("Please wait for the current traversal to complete")]
    Busy {
        /// The order of the traversal that is playing.
        active: Order,
    },
}

/// What a single tick produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame<T> {
    /// `value` is now the highlighted node. `step` counts from 0.
    Highlight {
        /// Position of `value` in the traversal.
        step: usize,
        /// The value to highlight.
        value: T,
    },
    /// Every value has been shown; the highlight is cleared and the animator is idle again.
    Finished,
}

#[derive(Debug)]
enum State<T> {
    Idle,
    Playing {
        traversal: Traversal<T>,
        /// Index of the next value to highlight.
        next: usize,
    },
}

/// Steps through one traversal at a time.
#[derive(Debug)]
pub struct Animator<T> {
    state: State<T>,
}

impl<T> Default for Animator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Animator<T> {
    /// Creates an idle animator.
    pub fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Begins playing `traversal`. Fails without touching the current playback if one is already
    /// running.
    pub fn start(&mut self, traversal: Traversal<T>) -> Result<(), AnimatorError> {
        if let State::Playing { traversal: active, .. } = &self.state {
            warn!(
                requested = traversal.label(),
                active = active.label(),
                "Traversal requested while another is playing"
            );
            return Err(AnimatorError::Busy {
                active: active.order(),
            });
        }

        info!(
            order = traversal.label(),
            steps = traversal.values().len(),
            "Starting traversal playback"
        );
        self.state = State::Playing { traversal, next: 0 };
        Ok(())
    }

    /// Advances the playback by one value. Returns `None` when idle.
    pub fn tick(&mut self) -> Option<Frame<T>>
    where
        T: Clone,
    {
        let State::Playing { traversal, next } = &mut self.state else {
            return None;
        };

        match traversal.values().get(*next).cloned() {
            Some(value) => {
                let frame = Frame::Highlight { step: *next, value };
                *next += 1;
                Some(frame)
            }
            None => {
                info!(order = traversal.label(), "Finished traversal playback");
                self.state = State::Idle;
                Some(Frame::Finished)
            }
        }
    }

    /// Whether nothing is being played.
    pub fn is_idle(&self) -> bool {
        matches!(self.state, State::Idle)
    }

    /// Whether a new traversal may be requested. Controls that start playbacks should be
    /// disabled while this is `false`.
    pub fn controls_enabled(&self) -> bool {
        self.is_idle()
    }

    /// The order currently playing, if any.
    pub fn active(&self) -> Option<Order> {
        match &self.state {
            State::Idle => None,
            State::Playing { traversal, .. } => Some(traversal.order()),
        }
    }

    /// The value highlighted by the most recent tick, if any.
    pub fn highlighted(&self) -> Option<&T> {
        match &self.state {
            State::Playing { traversal, next } if *next > 0 => traversal.values().get(*next - 1),
            _ => None,
        }
    }

    /// A status line such as `"In-order traversal is in progress..."`, or `None` when idle.
    pub fn status(&self) -> Option<String> {
        self.active()
            .map(|order| format!("{} traversal is in progress...", order.label()))
    }
}

/// Drives an [`Animator`] in real time, waiting `interval` after each highlighted value.
#[derive(Copy, Clone, Debug)]
pub struct Player {
    interval: Duration,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_INTERVAL)
    }
}

impl Player {
    /// A player that keeps each value highlighted for `interval`.
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// The delay between steps.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Starts `traversal` on `animator` and ticks it until it finishes, handing every frame to
    /// `on_frame` along with the animator (so status and highlight can be read back).
    pub fn play<T, F>(
        &self,
        animator: &mut Animator<T>,
        traversal: Traversal<T>,
        mut on_frame: F,
    ) -> Result<(), AnimatorError>
    where
        T: Clone,
        F: FnMut(&Animator<T>, &Frame<T>),
    {
        animator.start(traversal)?;

        while let Some(frame) = animator.tick() {
            on_frame(animator, &frame);
            if let Frame::Highlight { step, .. } = frame {
                debug!(step, "Highlighted");
                thread::sleep(self.interval);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Tree;

    fn tree() -> Tree<i64> {
        Tree::from_values(vec![1, 2, 3, 4, 5, 6, 7])
    }

    /// Ticks until the animator goes idle and returns the highlighted values.
    fn drain(animator: &mut Animator<i64>) -> Vec<i64> {
        let mut seen = Vec::new();
        while let Some(frame) = animator.tick() {
            if let Frame::Highlight { value, .. } = frame {
                seen.push(value);
            }
        }
        seen
    }

    #[test]
    fn test_idle_tick() {
        let mut animator = Animator::<i64>::new();

        assert_eq!(animator.tick(), None);
        assert!(animator.controls_enabled());
        assert_eq!(animator.status(), None);
        assert_eq!(animator.highlighted(), None);
    }

    #[test]
    fn test_plays_whole_sequence() {
        let mut animator = Animator::new();
        animator.start(Order::Post.traverse(&tree())).unwrap();

        assert_eq!(drain(&mut animator), [1, 3, 2, 5, 7, 6, 4]);
        assert!(animator.is_idle());
    }

    #[test]
    fn test_busy_leaves_playback_alone() {
        let mut animator = Animator::new();
        animator.start(Order::Pre.traverse(&tree())).unwrap();
        animator.tick();
        animator.tick();

        let err = animator.start(Order::In.traverse(&tree())).unwrap_err();
        assert_eq!(err, AnimatorError::Busy { active: Order::Pre });
        assert_eq!(
            err.to_string(),
            "Please wait for the current traversal to complete"
        );

        assert_eq!(animator.active(), Some(Order::Pre));
        assert_eq!(animator.highlighted(), Some(&2));
        assert_eq!(drain(&mut animator), [1, 3, 6, 5, 7]);
    }

    #[test]
    fn test_controls_and_status_while_playing() {
        let mut animator = Animator::new();
        animator.start(Order::In.traverse(&tree())).unwrap();

        assert!(!animator.controls_enabled());
        assert_eq!(
            animator.status().as_deref(),
            Some("In-order traversal is in progress...")
        );

        drain(&mut animator);
        assert!(animator.controls_enabled());
        assert_eq!(animator.highlighted(), None);
    }

    #[test]
    fn test_restart_after_finish() {
        let mut animator = Animator::new();
        animator.start(Order::In.traverse(&tree())).unwrap();
        drain(&mut animator);

        assert!(animator.start(Order::Pre.traverse(&tree())).is_ok());
        assert_eq!(animator.active(), Some(Order::Pre));
    }

    #[test]
    fn test_empty_traversal_finishes_immediately() {
        let mut animator = Animator::new();
        animator.start(Traversal::new(Order::In, Vec::<i64>::new())).unwrap();

        assert_eq!(animator.tick(), Some(Frame::Finished));
        assert_eq!(animator.tick(), None);
    }

    #[test]
    fn test_player_reports_every_frame() {
        let player = Player::new(Duration::ZERO);
        let mut animator = Animator::new();
        let mut frames = Vec::new();
        let mut statuses = Vec::new();

        player
            .play(&mut animator, Order::In.traverse(&tree()), |a, frame| {
                frames.push(frame.clone());
                statuses.push(a.status());
            })
            .unwrap();

        assert_eq!(frames.len(), 8);
        assert_eq!(frames[0], Frame::Highlight { step: 0, value: 1 });
        assert_eq!(frames[7], Frame::Finished);
        assert!(statuses[..7].iter().all(Option::is_some));
        assert_eq!(statuses[7], None);
        assert!(animator.is_idle());
    }

    #[test]
    fn test_player_refuses_when_busy() {
        let player = Player::new(Duration::ZERO);
        let mut animator = Animator::new();
        animator.start(Order::Pre.traverse(&tree())).unwrap();

        let result = player.play(&mut animator, Order::Post.traverse(&tree()), |_, _| {
            panic!("no frames expected")
        });

        assert_eq!(result, Err(AnimatorError::Busy { active: Order::Pre }));
        assert_eq!(animator.active(), Some(Order::Pre));
    }
}
