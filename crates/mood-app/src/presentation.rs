//! Result card lifecycle: entrance, delayed flip, close
//!
//! The flip itself is scheduled outside the state (see `actions::flip`);
//! the state only owns the cancel side of that timer so closing the card
//! can stop it.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use mood_core::prelude::*;

/// Ticks for the card to grow to full size
pub const ENTRANCE_FRAMES: u8 = 6;

/// Ticks for a full flip; the face switches halfway
pub const FLIP_FRAMES: u8 = 12;

/// Screen rectangle occupied by the rendered card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitBox {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl HitBox {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && column < self.x.saturating_add(self.width)
            && row >= self.y
            && row < self.y.saturating_add(self.height)
    }
}

/// State of the result overlay
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PresentationState {
    pub visible: bool,
    /// Set once per card, when its flip timer fires
    pub flipped: bool,
    /// Identifies the current card so late timers can be told apart
    pub card_id: u64,
    pub entrance_frame: u8,
    pub flip_frame: u8,
    /// Last rendered card area, written by the renderer
    pub card_area: Option<HitBox>,
    #[serde(skip)]
    flip_cancel: Option<watch::Sender<bool>>,
}

impl PresentationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a fresh card on its front face.
    ///
    /// Any timer belonging to the previous card is cancelled. Returns the
    /// new card id and the receiver the flip timer should watch.
    pub fn open(&mut self) -> (u64, watch::Receiver<bool>) {
        self.cancel_timer();

        let (cancel_tx, cancel_rx) = watch::channel(false);
        self.card_id += 1;
        self.visible = true;
        self.flipped = false;
        self.entrance_frame = 0;
        self.flip_frame = 0;
        self.card_area = None;
        self.flip_cancel = Some(cancel_tx);

        debug!("Card {} opened", self.card_id);
        (self.card_id, cancel_rx)
    }

    /// Flip the card if it is still the visible one and not yet flipped
    pub fn flip(&mut self, card_id: u64) -> bool {
        if !self.visible || self.flipped || card_id != self.card_id {
            debug!("Ignoring flip for card {} (current {})", card_id, self.card_id);
            return false;
        }
        self.flipped = true;
        self.flip_frame = 0;
        // The timer has done its job
        self.flip_cancel = None;
        true
    }

    /// Hide the card and stop its pending flip. Returns false if nothing
    /// was showing.
    pub fn close(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        self.cancel_timer();
        self.visible = false;
        self.flipped = false;
        self.entrance_frame = 0;
        self.flip_frame = 0;
        self.card_area = None;
        debug!("Card {} closed", self.card_id);
        true
    }

    /// Advance running animations by one frame
    pub fn tick(&mut self) {
        if !self.visible {
            return;
        }
        if self.entrance_frame < ENTRANCE_FRAMES {
            self.entrance_frame += 1;
        }
        if self.flipped && self.flip_frame < FLIP_FRAMES {
            self.flip_frame += 1;
        }
    }

    /// Whether the guidance face is the one to draw
    pub fn showing_back(&self) -> bool {
        self.flipped && self.flip_frame >= FLIP_FRAMES / 2
    }

    /// Entrance progress in `0.0..=1.0`
    pub fn entrance_progress(&self) -> f32 {
        f32::from(self.entrance_frame) / f32::from(ENTRANCE_FRAMES)
    }

    /// Horizontal scale of the card during a flip, `1.0` when at rest.
    ///
    /// Collapses to zero at the halfway frame, then grows back.
    pub fn flip_scale(&self) -> f32 {
        if !self.flipped || self.flip_frame >= FLIP_FRAMES {
            return 1.0;
        }
        let half = f32::from(FLIP_FRAMES) / 2.0;
        (f32::from(self.flip_frame) - half).abs() / half
    }

    /// True when a click at this cell landed outside the card
    pub fn is_outside(&self, column: u16, row: u16) -> bool {
        match self.card_area {
            Some(area) => !area.contains(column, row),
            None => false,
        }
    }

    pub fn has_pending_flip(&self) -> bool {
        self.flip_cancel.is_some()
    }

    fn cancel_timer(&mut self) {
        if let Some(cancel) = self.flip_cancel.take() {
            // Receiver may already be gone if the timer finished
            let _ = cancel.send(true);
            debug!("Flip timer for card {} cancelled", self.card_id);
        }
    }
}
