//! Greedy tiered bundle pricing for photo checkout.
//!
//! Each album carries a volume-discount schedule: a tier `{quantity, price}`
//! sells a package of `quantity` photos for a flat `price`. Resolution packs
//! the purchased photos into the largest tiers first. The result is greedy,
//! not globally optimal, and that is the contract: irregular schedules keep
//! their historical totals.

/// One volume-discount tier of an album's schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    /// Number of photos the package covers.
    pub quantity: i64,
    /// Flat price for the whole package.
    pub price: f64,
}

/// Resolve the total price of a photo bundle against a tier schedule.
///
/// `photo_prices` holds the individual price of every purchased photo, in
/// fetch order. Tiers are applied greedily in descending quantity order:
/// `packages = remaining / quantity`, then `remaining %= quantity`. Photos
/// no tier could cover are charged at their own price, taking the **last**
/// `remaining` entries of `photo_prices`.
///
/// Tiers with a non-positive quantity are ignored.
pub fn resolve_bundle_price(tiers: &[Tier], photo_prices: &[f64]) -> f64 {
    let mut schedule: Vec<Tier> = tiers.iter().copied().filter(|t| t.quantity > 0).collect();
    schedule.sort_by(|a, b| b.quantity.cmp(&a.quantity));

    let mut remaining = photo_prices.len() as i64;
    let mut total = 0.0;

    for tier in &schedule {
        let packages = remaining / tier.quantity;
        total += packages as f64 * tier.price;
        remaining %= tier.quantity;
    }

    if remaining > 0 {
        let start = photo_prices.len() - remaining as usize;
        total += photo_prices[start..].iter().sum::<f64>();
    }

    total
}
