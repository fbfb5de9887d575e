use crate::constants::MAX_SEQUENCE_TRAVEL;
use crate::types::Sequence;

/// Tracks the next echo request sequence number and validates replies.
///
/// Sequence numbers start at zero and wrap at 65535.  Before the first wrap
/// a reply is valid if its sequence number has been sent, i.e. is strictly
/// below the next to be sent.  After a wrap the distance from the reply back
/// past the wrap to the next sequence number must be within
/// [`MAX_SEQUENCE_TRAVEL`], which rejects replies stale by more than one
/// window.  The wrapped state clears once the window is out of reach again.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SequenceTracker {
    next_sequence: Sequence,
    wrapped: bool,
}

impl SequenceTracker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_sequence: Sequence(0),
            wrapped: false,
        }
    }

    /// The sequence number the next echo request will carry.
    #[must_use]
    pub const fn next_sequence(&self) -> Sequence {
        self.next_sequence
    }

    /// Advance past the sequence number just used.
    pub fn advance(&mut self) {
        if self.next_sequence.0 < u16::MAX {
            self.next_sequence.0 += 1;
            if self.wrapped && self.next_sequence.0 >= MAX_SEQUENCE_TRAVEL {
                self.wrapped = false;
            }
        } else {
            self.wrapped = true;
            self.next_sequence = Sequence(0);
        }
    }

    /// Whether a reply with the observed sequence number is acceptable.
    #[must_use]
    pub fn validate(&self, observed: Sequence) -> bool {
        if self.wrapped {
            u32::from(u16::MAX - observed.0) + u32::from(self.next_sequence.0)
                < u32::from(MAX_SEQUENCE_TRAVEL)
        } else {
            observed < self.next_sequence
        }
    }
}
