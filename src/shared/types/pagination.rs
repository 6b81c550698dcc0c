/// Paginated response wrapper
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = ((total as f64) / (limit as f64)).ceil() as u32;
        Self {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let page = PaginatedResult::new(vec![1, 2, 3], 7, 1, 3);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_exact_fit() {
        let page = PaginatedResult::new(vec![1, 2], 4, 2, 2);
        assert_eq!(page.total_pages, 2);
    }
}
