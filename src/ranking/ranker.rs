use std::cmp::Ordering;

/// Anything the ranking comparator can order.
pub trait Rankable {
    fn rank_rating(&self) -> Option<f64>;
    fn rank_name(&self) -> &str;
}

impl<T: Rankable + ?Sized> Rankable for &T {
    fn rank_rating(&self) -> Option<f64> {
        (**self).rank_rating()
    }

    fn rank_name(&self) -> &str {
        (**self).rank_name()
    }
}

/// Rating descending with absent ratings below any number, then name ascending.
///
/// Ratings are compared with [`f64::total_cmp`], so the order is total. Items equal on
/// both keys compare `Equal`; [`rank`] keeps them in input order.
pub fn compare<T: Rankable + ?Sized>(a: &T, b: &T) -> Ordering {
    let by_rating = match (a.rank_rating(), b.rank_rating()) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_rating.then_with(|| a.rank_name().cmp(b.rank_name()))
}

/// Sorts `items` with [`compare`] (stable) and keeps the first `limit`.
pub fn rank<T: Rankable>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.sort_by(compare);
    items.truncate(limit);
    items
}
