use std::fmt;

use crate::ai::Move;
use crate::core::{ChainSummary, Field};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    NoActive,
    RotationBlocked,
    ColumnOutOfBounds,
    ColumnBlocked,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::NoActive => "no_active",
            PlaceError::RotationBlocked
            | PlaceError::ColumnOutOfBounds
            | PlaceError::ColumnBlocked => "invalid_place",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::NoActive => "no active piece",
            PlaceError::RotationBlocked => "could not rotate to target orientation",
            PlaceError::ColumnOutOfBounds => "target column would place the pair out of bounds",
            PlaceError::ColumnBlocked => "could not move to target column due to collision",
        }
    }
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for PlaceError {}

/// Play a [`Move`] through the field's own rotate/move calls, then drop, resolve and
/// promote the next piece.
///
/// On error the field is left exactly as it was.
pub fn apply_move(field: &mut Field, mv: Move) -> Result<ChainSummary, PlaceError> {
    let Some(active0) = field.active() else {
        return Err(PlaceError::NoActive);
    };
    let target = mv.target_orientation(active0.orientation);

    let cw = active0.orientation.cw_turns_to(target);
    let ccw = (4 - cw) % 4;

    let mut plans: [(bool, u8); 2] = [(true, cw), (false, ccw)];
    if plans[1].1 < plans[0].1 {
        plans.swap(0, 1);
    }

    let snapshot = field.clone();
    let mut rotated = false;
    for (is_cw, steps) in plans {
        *field = snapshot.clone();
        let mut ok = true;
        for _ in 0..steps {
            let turned = if is_cw {
                field.rotate_cw()
            } else {
                field.rotate_ccw()
            };
            if !turned {
                ok = false;
                break;
            }
        }
        if ok {
            rotated = true;
            break;
        }
    }
    let Some(active) = field.active().filter(|a| rotated && a.orientation == target) else {
        *field = snapshot;
        return Err(PlaceError::RotationBlocked);
    };

    let (sx, _) = target.offset();
    let width = field.width() as i8;
    let column = mv.target_column;
    if column < 0 || column >= width || column + sx < 0 || column + sx >= width {
        *field = snapshot;
        return Err(PlaceError::ColumnOutOfBounds);
    }

    let dx = column - active.x;
    for _ in 0..dx.unsigned_abs() {
        let moved = if dx > 0 {
            field.move_right()
        } else {
            field.move_left()
        };
        if !moved {
            *field = snapshot;
            return Err(PlaceError::ColumnBlocked);
        }
    }

    let summary = field.lock_and_resolve();
    if !field.is_game_over() {
        field.generate_next();
    }
    Ok(summary)
}
