/// ページ指定（0始まりのページ番号と1ページあたりの件数）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub number: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(number: u32, size: u32) -> Self {
        Self { number, size }
    }

    /// SQLの OFFSET に渡す値
    pub fn offset(&self) -> i64 {
        i64::from(self.number) * i64::from(self.size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

/// 1ページ分の結果と総件数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u32,
    pub size: u32,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            items,
            number: request.number,
            size: request.size,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(u64::from(self.size))
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_number_times_size() {
        assert_eq!(PageRequest::new(0, 5).offset(), 0);
        assert_eq!(PageRequest::new(3, 5).offset(), 15);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let page = Page::new(vec![1, 2], PageRequest::new(1, 5), 7);
        assert_eq!(page.total_pages(), 2);

        let empty: Page<i32> = Page::new(vec![], PageRequest::new(0, 5), 0);
        assert_eq!(empty.total_pages(), 0);

        let exact: Page<i32> = Page::new(vec![], PageRequest::new(0, 5), 10);
        assert_eq!(exact.total_pages(), 2);
    }
}
