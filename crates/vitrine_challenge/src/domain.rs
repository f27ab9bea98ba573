//! # Configuration Domain
//!
//! A buildable product variant is the tuple (color, body, wheels). Each
//! attribute has a small fixed domain; two configurations are equal iff all
//! three attributes match exactly - no partial credit.
//!
//! The swatch and label strings are the exact values the presentation layer
//! renders on its pickers, so string input parses against them and anything
//! else is rejected.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ChallengeError, ChallengeResult};

/// Body color, one of four swatches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Signature blue.
    Azure,
    /// Bright green.
    Mint,
    /// Warm red.
    Coral,
    /// Soft yellow.
    Amber,
}

impl Color {
    /// Every color in the domain, in picker order.
    pub const ALL: [Self; 4] = [Self::Azure, Self::Mint, Self::Coral, Self::Amber];

    /// The CSS swatch value the presentation layer paints with.
    #[inline]
    #[must_use]
    pub const fn swatch(self) -> &'static str {
        match self {
            Self::Azure => "#308CFF",
            Self::Mint => "#14e3a1",
            Self::Coral => "#f35",
            Self::Amber => "#f5c84b",
        }
    }

    /// Parses a swatch string back into a color.
    ///
    /// # Errors
    ///
    /// Returns [`ChallengeError::UnknownValue`] for anything outside the
    /// four-swatch domain.
    pub fn parse(value: &str) -> ChallengeResult<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.swatch() == value)
            .ok_or_else(|| ChallengeError::UnknownValue {
                attribute: Attribute::Color,
                value: value.to_owned(),
            })
    }
}

/// Body shape, one of three kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    /// Box body.
    Cube,
    /// Four-sided cone body.
    Pyramid,
    /// Round body.
    Cylinder,
}

impl Body {
    /// Every body in the domain, in picker order.
    pub const ALL: [Self; 3] = [Self::Cube, Self::Pyramid, Self::Cylinder];

    /// The label shown on the picker button.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cube => "Cube",
            Self::Pyramid => "Pyramid",
            Self::Cylinder => "Cylinder",
        }
    }

    /// Parses a picker label back into a body.
    ///
    /// # Errors
    ///
    /// Returns [`ChallengeError::UnknownValue`] for anything outside the
    /// three-shape domain.
    pub fn parse(value: &str) -> ChallengeResult<Self> {
        Self::ALL
            .into_iter()
            .find(|b| b.label() == value)
            .ok_or_else(|| ChallengeError::UnknownValue {
                attribute: Attribute::Body,
                value: value.to_owned(),
            })
    }
}

/// Wheel variant, one of two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wheels {
    /// Narrow torus.
    Thin,
    /// Wide torus.
    Chunky,
}

impl Wheels {
    /// Every wheel variant in the domain, in picker order.
    pub const ALL: [Self; 2] = [Self::Thin, Self::Chunky];

    /// The label shown on the picker button.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Thin => "Thin",
            Self::Chunky => "Chunky",
        }
    }

    /// Parses a picker label back into a wheel variant.
    ///
    /// # Errors
    ///
    /// Returns [`ChallengeError::UnknownValue`] for anything outside the
    /// two-variant domain.
    pub fn parse(value: &str) -> ChallengeResult<Self> {
        Self::ALL
            .into_iter()
            .find(|w| w.label() == value)
            .ok_or_else(|| ChallengeError::UnknownValue {
                attribute: Attribute::Wheels,
                value: value.to_owned(),
            })
    }
}

/// The three independent attributes of a configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    /// Body color.
    Color,
    /// Body shape.
    Body,
    /// Wheel variant.
    Wheels,
}

impl Attribute {
    /// Parses an attribute name from the presentation layer.
    ///
    /// # Errors
    ///
    /// Returns [`ChallengeError::UnknownAttribute`] for any name other than
    /// `color`, `body` or `wheels`.
    pub fn parse(name: &str) -> ChallengeResult<Self> {
        match name {
            "color" => Ok(Self::Color),
            "body" => Ok(Self::Body),
            "wheels" => Ok(Self::Wheels),
            other => Err(ChallengeError::UnknownAttribute(other.to_owned())),
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Color => "color",
            Self::Body => "body",
            Self::Wheels => "wheels",
        };
        f.write_str(name)
    }
}

/// One buildable product variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Configuration {
    /// Body color.
    pub color: Color,
    /// Body shape.
    pub body: Body,
    /// Wheel variant.
    pub wheels: Wheels,
}

impl Configuration {
    /// Draws each attribute independently and uniformly from its domain.
    ///
    /// Memoryless by design: nothing prevents the result from repeating or
    /// resembling a prior target.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            color: Color::ALL[rng.gen_range(0..Color::ALL.len())],
            body: Body::ALL[rng.gen_range(0..Body::ALL.len())],
            wheels: Wheels::ALL[rng.gen_range(0..Wheels::ALL.len())],
        }
    }
}

/// A typed, validated single-attribute selection.
///
/// The presentation layer either constructs these directly (invalid values
/// are unrepresentable) or goes through [`Selection::parse`] for string
/// input, which fails fast on anything outside the domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Pick a color.
    Color(Color),
    /// Pick a body.
    Body(Body),
    /// Pick a wheel variant.
    Wheels(Wheels),
}

impl Selection {
    /// Parses an (attribute, value) string pair from a picker event.
    ///
    /// # Errors
    ///
    /// Returns [`ChallengeError::UnknownAttribute`] or
    /// [`ChallengeError::UnknownValue`] on out-of-domain input.
    pub fn parse(attribute: &str, value: &str) -> ChallengeResult<Self> {
        match Attribute::parse(attribute)? {
            Attribute::Color => Color::parse(value).map(Self::Color),
            Attribute::Body => Body::parse(value).map(Self::Body),
            Attribute::Wheels => Wheels::parse(value).map(Self::Wheels),
        }
    }

    /// The attribute this selection sets.
    #[must_use]
    pub const fn attribute(self) -> Attribute {
        match self {
            Self::Color(_) => Attribute::Color,
            Self::Body(_) => Attribute::Body,
            Self::Wheels(_) => Attribute::Wheels,
        }
    }
}

/// The player's in-progress pick.
///
/// Every attribute starts unset and is overwritten one at a time; nothing
/// ever auto-populates it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Choice {
    /// Chosen color, if any.
    pub color: Option<Color>,
    /// Chosen body, if any.
    pub body: Option<Body>,
    /// Chosen wheels, if any.
    pub wheels: Option<Wheels>,
}

impl Choice {
    /// An empty choice with all attributes unset.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            color: None,
            body: None,
            wheels: None,
        }
    }

    /// Applies one selection, leaving the other attributes untouched.
    pub fn apply(&mut self, selection: Selection) {
        match selection {
            Selection::Color(c) => self.color = Some(c),
            Selection::Body(b) => self.body = Some(b),
            Selection::Wheels(w) => self.wheels = Some(w),
        }
    }

    /// True iff all three attributes are set and equal the target's.
    #[must_use]
    pub fn matches(&self, target: &Configuration) -> bool {
        self.color == Some(target.color)
            && self.body == Some(target.body)
            && self.wheels == Some(target.wheels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swatch_round_trip() {
        for color in Color::ALL {
            assert_eq!(Color::parse(color.swatch()).unwrap(), color);
        }
        for body in Body::ALL {
            assert_eq!(Body::parse(body.label()).unwrap(), body);
        }
        for wheels in Wheels::ALL {
            assert_eq!(Wheels::parse(wheels.label()).unwrap(), wheels);
        }
    }

    #[test]
    fn test_out_of_domain_rejected() {
        assert!(matches!(
            Color::parse("#ffffff"),
            Err(ChallengeError::UnknownValue {
                attribute: Attribute::Color,
                ..
            })
        ));
        assert!(matches!(
            Selection::parse("spoiler", "Cube"),
            Err(ChallengeError::UnknownAttribute(_))
        ));
        assert!(matches!(
            Selection::parse("wheels", "Hover"),
            Err(ChallengeError::UnknownValue {
                attribute: Attribute::Wheels,
                ..
            })
        ));
    }

    #[test]
    fn test_choice_partial_never_matches() {
        let target = Configuration {
            color: Color::Azure,
            body: Body::Cube,
            wheels: Wheels::Thin,
        };

        let mut choice = Choice::empty();
        assert!(!choice.matches(&target));

        choice.apply(Selection::Color(Color::Azure));
        choice.apply(Selection::Body(Body::Cube));
        assert!(!choice.matches(&target));

        choice.apply(Selection::Wheels(Wheels::Thin));
        assert!(choice.matches(&target));
    }

    #[test]
    fn test_choice_mismatch_on_one_attribute() {
        let target = Configuration {
            color: Color::Mint,
            body: Body::Pyramid,
            wheels: Wheels::Chunky,
        };

        let mut choice = Choice::empty();
        choice.apply(Selection::Color(Color::Mint));
        choice.apply(Selection::Body(Body::Pyramid));
        choice.apply(Selection::Wheels(Wheels::Thin));
        assert!(!choice.matches(&target));
    }
}
