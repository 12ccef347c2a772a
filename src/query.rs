/// Filter and paging parameters for a list request.
///
/// Regular keys appear once in the query string, the last value set wins.
/// `sort` may be given several times and every entry is sent, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    params: Vec<(String, String)>,
    sort: Vec<String>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        let key = key.into();
        let value = value.to_string();
        if key == "sort" {
            return self.sort(value);
        }
        if value.is_empty() {
            return self;
        }

        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.params.push((key, value)),
        }
        self
    }

    pub fn page(self, page: u32) -> Self {
        self.param("page", page)
    }

    pub fn size(self, size: u32) -> Self {
        self.param("size", size)
    }

    /// Adds a sort criterion such as `"id,asc"`.
    pub fn sort(mut self, criterion: impl Into<String>) -> Self {
        let criterion = criterion.into();
        if !criterion.is_empty() {
            self.sort.push(criterion);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty() && self.sort.is_empty()
    }

    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .cloned()
            .chain(self.sort.iter().map(|s| ("sort".to_string(), s.clone())))
            .collect()
    }
}
