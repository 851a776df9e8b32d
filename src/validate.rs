//! Structural validation of Ge'ez numeral strings.
//!
//! The grammar is small: a numeral is a sequence of digit groups separated by
//! multipliers (፻ or ፼). A digit group holds at most one tens glyph followed
//! by at most one ones glyph. Validation is independent of the value the
//! string denotes, so it can run on every keystroke of a live input field and
//! gates the decoder before any value is accumulated.

use crate::error::{StructuralError, StructuralResult};
use crate::glyph::catalog::{self, DigitClass};

/// Check that `candidate` is a well-formed Ge'ez numeral.
///
/// Surrounding whitespace is ignored. Character checks run over the whole
/// string before the grammar is checked, so an unknown glyph is reported
/// even when a grammar violation appears earlier.
pub fn validate(candidate: &str) -> StructuralResult<()> {
    let input = candidate.trim();
    if input.is_empty() {
        return Err(StructuralError::EmptyInput);
    }

    let mut classes = Vec::with_capacity(input.len() / 3);
    for (i, ch) in input.chars().enumerate() {
        match catalog::classify(ch) {
            Some(class) => classes.push(class),
            None => {
                return Err(StructuralError::UnknownGlyph {
                    glyph: ch,
                    position: i + 1,
                });
            }
        }
    }

    let mut group = GroupState::default();
    for (i, class) in classes.into_iter().enumerate() {
        group.accept(class).map_err(|violation| violation.at(input, i + 1))?;
    }

    Ok(())
}

/// Whether `candidate` is a well-formed Ge'ez numeral.
pub fn is_valid(candidate: &str) -> bool {
    validate(candidate).is_ok()
}

/// What the current digit group has seen so far.
#[derive(Debug, Default, Clone, Copy)]
struct GroupState {
    has_tens: bool,
    has_ones: bool,
}

#[derive(Debug, Clone, Copy)]
enum Violation {
    DuplicateTens,
    DuplicateOnes,
    TensAfterOnes,
}

impl Violation {
    fn at(self, input: &str, position: usize) -> StructuralError {
        let input = input.to_string();
        match self {
            Violation::DuplicateTens => StructuralError::DuplicateTens { input, position },
            Violation::DuplicateOnes => StructuralError::DuplicateOnes { input, position },
            Violation::TensAfterOnes => StructuralError::TensAfterOnes { input, position },
        }
    }
}

impl GroupState {
    fn accept(&mut self, class: DigitClass) -> Result<(), Violation> {
        match class {
            DigitClass::Tens => {
                if self.has_tens {
                    return Err(Violation::DuplicateTens);
                }
                if self.has_ones {
                    return Err(Violation::TensAfterOnes);
                }
                self.has_tens = true;
            }
            DigitClass::Ones => {
                if self.has_ones {
                    return Err(Violation::DuplicateOnes);
                }
                self.has_ones = true;
            }
            DigitClass::Hundred | DigitClass::Myriad => *self = GroupState::default(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_numerals() {
        for ok in ["፩", "፲", "፲፩", "፻", "፼", "፻፳፫", "፳፻፳፩", "፼፼፼", "፪፼", "፺፱፻፺፱"] {
            assert!(validate(ok).is_ok(), "{ok} should be valid");
        }
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert_eq!(validate(""), Err(StructuralError::EmptyInput));
        assert_eq!(validate("  \t"), Err(StructuralError::EmptyInput));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert!(validate("  ፻፳፫\n").is_ok());
    }

    #[test]
    fn unknown_glyph_reports_char_and_position() {
        assert_eq!(
            validate("፻ዘ"),
            Err(StructuralError::UnknownGlyph {
                glyph: 'ዘ',
                position: 2
            })
        );
        assert_eq!(
            validate("12"),
            Err(StructuralError::UnknownGlyph {
                glyph: '1',
                position: 1
            })
        );
    }

    #[test]
    fn unknown_glyph_wins_over_earlier_grammar_error() {
        assert!(matches!(
            validate("፫፬x"),
            Err(StructuralError::UnknownGlyph { glyph: 'x', position: 3 })
        ));
    }

    #[test]
    fn duplicate_ones() {
        assert_eq!(
            validate("፫፬"),
            Err(StructuralError::DuplicateOnes {
                input: "፫፬".into(),
                position: 2
            })
        );
    }

    #[test]
    fn duplicate_tens() {
        assert!(matches!(
            validate("፲፳"),
            Err(StructuralError::DuplicateTens { position: 2, .. })
        ));
    }

    #[test]
    fn tens_after_ones() {
        assert!(matches!(
            validate("፩፲"),
            Err(StructuralError::TensAfterOnes { position: 2, .. })
        ));
    }

    #[test]
    fn multipliers_reset_the_group() {
        assert!(validate("፩፻፩").is_ok());
        assert!(validate("፲፼፲").is_ok());
        assert!(matches!(
            validate("፻፩፪"),
            Err(StructuralError::DuplicateOnes { position: 3, .. })
        ));
    }

    #[test]
    fn validation_is_idempotent() {
        for s in ["፻፳፫", "፫፬", "", "abc", "፩፲"] {
            assert_eq!(validate(s), validate(s));
        }
    }
}
