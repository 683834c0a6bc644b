//! Derived display values for a book's rating indicator.

use core::fmt::{self, Display, Formatter};

/// Rating bar colour bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingBackground {
	/// `rating < 6`
	Low,
	/// `6 < rating <= 8`
	Good,
	/// `8 < rating <= 9`
	Great,
	/// Everything else: `rating > 9`, but also exactly `6` and anything that isn't a number.
	Other,
}

impl RatingBackground {
	/// The CSS `background` value for this bucket.
	#[must_use]
	pub fn css(self) -> &'static str {
		match self {
			Self::Low => "linear-gradient(to bottom, #fefcea 0%, #f1da36 100%)",
			Self::Good => "linear-gradient(to bottom, #b4df5b 0%, #b4df5b 100%)",
			Self::Great => "linear-gradient(to bottom, #299a0b 0%, #299a0b 100%)",
			Self::Other => "linear-gradient(to bottom, #ff0084 0%, #ff0084 100%)",
		}
	}
}

impl Display for RatingBackground {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.css())
	}
}

/// Picks the colour bucket for `rating` (on a 0 to 10 scale).
///
/// A rating of exactly 6 lands in [`RatingBackground::Other`], the same colour as top ratings.
/// Catalog pages are styled around this, so it's kept as-is.
#[must_use]
pub fn rating_background(rating: f64) -> RatingBackground {
	if rating < 6. {
		RatingBackground::Low
	} else if rating > 6. && rating <= 8. {
		RatingBackground::Good
	} else if rating > 8. && rating <= 9. {
		RatingBackground::Great
	} else {
		RatingBackground::Other
	}
}

/// Width of the rating bar, in percent.
#[must_use]
pub fn rating_bar_width(rating: f64) -> f64 {
	rating * 10.
}
