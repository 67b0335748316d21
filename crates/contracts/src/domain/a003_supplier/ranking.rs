use super::aggregate::Supplier;

/// The `n` suppliers with the largest share, largest first.
///
/// The sort is stable, so suppliers with equal shares keep list order.
pub fn top_by_share(suppliers: &[Supplier], n: usize) -> Vec<&Supplier> {
    let mut ranked: Vec<&Supplier> = suppliers.iter().collect();
    ranked.sort_by(|a, b| b.share.cmp(&a.share));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_supplier::suppliers;

    #[test]
    fn test_top_four() {
        let top: Vec<(&str, u8)> = top_by_share(suppliers(), 4)
            .iter()
            .map(|s| (s.name.as_str(), s.share))
            .collect();
        assert_eq!(
            top,
            vec![("Apple", 61), ("Samsung", 15), ("Mugna Tech", 11), ("Logitech", 5)]
        );
    }

    #[test]
    fn test_ties_keep_list_order() {
        let names: Vec<&str> = top_by_share(suppliers(), 11)
            .iter()
            .skip(6)
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["NZXT", "Xiaomi", "Microsoft", "Sony", "Dell"]);
    }

    #[test]
    fn test_n_larger_than_list() {
        assert_eq!(top_by_share(suppliers(), 50).len(), suppliers().len());
        assert!(top_by_share(&[], 4).is_empty());
    }
}
