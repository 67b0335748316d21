/// One page of a (possibly filtered) list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Always at least 1, even for an empty list.
    pub total_pages: usize,
    /// 1-based page actually shown after clamping.
    pub effective_page: usize,
    pub total_count: usize,
}

/// A single page selector button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    pub number: usize,
    pub selected: bool,
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Slices out page `requested_page` (1-based).
///
/// Requests outside `1..=total_pages` are clamped, so a stale page index
/// left over from a longer list shows the last page instead of nothing.
pub fn paginate<T: Clone>(list: &[T], page_size: usize, requested_page: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(list.len(), page_size);
    let effective_page = requested_page.clamp(1, total_pages);

    let start = (effective_page - 1) * page_size;
    let end = (start + page_size).min(list.len());
    let items = list.get(start..end).unwrap_or(&[]).to_vec();

    Page {
        items,
        total_pages,
        effective_page,
        total_count: list.len(),
    }
}

/// Builds the selector row: one control per page, `effective_page` selected.
pub fn page_controls(total_pages: usize, effective_page: usize) -> Vec<PageControl> {
    (1..=total_pages.max(1))
        .map(|number| PageControl {
            number,
            selected: number == effective_page,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 6), 1);
        assert_eq!(total_pages(1, 6), 1);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(11, 8), 2);
        assert_eq!(total_pages(16, 8), 2);
        assert_eq!(total_pages(17, 8), 3);
    }

    #[test]
    fn test_empty_list_has_one_empty_page() {
        let page = paginate::<u32>(&[], 6, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.effective_page, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_eight_items_six_per_page() {
        let list: Vec<u32> = (1..=8).collect();
        let first = paginate(&list, 6, 1);
        assert_eq!(first.items, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(first.total_pages, 2);

        let second = paginate(&list, 6, 2);
        assert_eq!(second.items, vec![7, 8]);
        assert_eq!(second.effective_page, 2);
    }

    #[test]
    fn test_out_of_range_requests_are_clamped() {
        let list: Vec<u32> = (1..=8).collect();
        let high = paginate(&list, 6, 9);
        assert_eq!(high.effective_page, 2);
        assert_eq!(high.items, vec![7, 8]);

        let zero = paginate(&list, 6, 0);
        assert_eq!(zero.effective_page, 1);
        assert_eq!(zero.items.len(), 6);
    }

    #[test]
    fn test_huge_page_and_zero_page_size() {
        let list: Vec<u32> = (1..=8).collect();
        let last = paginate(&list, 6, usize::MAX);
        assert_eq!(last.effective_page, 2);
        assert_eq!(last.items, vec![7, 8]);

        let single = paginate(&list, 0, 3);
        assert_eq!(single.total_pages, 8);
        assert_eq!(single.effective_page, 3);
        assert_eq!(single.items, vec![3]);
    }

    #[test]
    fn test_pages_partition_the_list() {
        for len in 0..30usize {
            let list: Vec<usize> = (0..len).collect();
            for page_size in 1..10 {
                let pages = total_pages(len, page_size);
                let joined: Vec<usize> = (1..=pages)
                    .flat_map(|p| paginate(&list, page_size, p).items)
                    .collect();
                assert_eq!(joined, list, "len {len}, page_size {page_size}");
            }
        }
    }

    #[test]
    fn test_page_controls_mark_selected() {
        let controls = page_controls(3, 2);
        assert_eq!(controls.len(), 3);
        assert_eq!(
            controls.iter().map(|c| c.number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(
            controls.iter().filter(|c| c.selected).map(|c| c.number).collect::<Vec<_>>(),
            vec![2]
        );
    }

    #[test]
    fn test_page_controls_never_empty() {
        assert_eq!(page_controls(0, 1), vec![PageControl { number: 1, selected: true }]);
    }
}
