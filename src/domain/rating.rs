//! Rating aggregate: fold a set of ratings into `{count, average}`.
//!
//! Ratings are summed as integers and divided once, so the result depends only
//! on the multiset of values and never on iteration order.

/// Summary of a set of ratings. `average` is `None` when `count == 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingAggregate {
    pub count: usize,
    pub average: Option<f64>,
}

/// Aggregate a sequence of ratings.
///
/// Range is not checked here; values are expected to come through
/// [`Rating`](super::Rating), which validates at ingestion.
pub fn aggregate<I>(ratings: I) -> RatingAggregate
where
    I: IntoIterator,
    I::Item: Into<i64>,
{
    let (count, sum) = ratings
        .into_iter()
        .fold((0usize, 0i64), |(count, sum), r| (count + 1, sum + r.into()));

    let average = if count == 0 {
        None
    } else {
        Some(sum as f64 / count as f64)
    };

    RatingAggregate { count, average }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Rating;

    #[test]
    fn empty_has_no_average() {
        let agg = aggregate(Vec::<i64>::new());
        assert_eq!(agg.count, 0);
        assert_eq!(agg.average, None);
    }

    #[test]
    fn mean_uses_float_division() {
        let agg = aggregate([4i64, 5]);
        assert_eq!(agg.count, 2);
        assert_eq!(agg.average, Some(4.5));
    }

    #[test]
    fn order_does_not_matter() {
        let base = [1i64, 2, 2, 3, 5, 4, 4, 1];
        let expected = aggregate(base);

        let mut reversed = base;
        reversed.reverse();
        assert_eq!(aggregate(reversed), expected);

        let mut sorted = base;
        sorted.sort_unstable();
        assert_eq!(aggregate(sorted), expected);

        let mut rotated = base;
        rotated.rotate_left(3);
        assert_eq!(aggregate(rotated), expected);
    }

    #[test]
    fn accepts_validated_ratings() {
        let ratings = [Rating::new(5).unwrap(), Rating::new(3).unwrap()];
        let agg = aggregate(ratings);
        assert_eq!(agg.count, 2);
        assert_eq!(agg.average, Some(4.0));
    }

    #[test]
    fn does_not_coerce_values() {
        // Unvalidated input passes straight through; no clamping.
        let agg = aggregate([10i64, 0]);
        assert_eq!(agg.average, Some(5.0));
    }
}
