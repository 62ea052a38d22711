//! Column definitions of the users table.

use crate::{SortKey, UserRecord, ViewParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    Name,
    Email,
    City,
}

impl ColumnKey {
    /// Cell text for `record`; missing values are empty.
    pub fn cell_text(self, record: &UserRecord) -> &str {
        match self {
            Self::Name => &record.name,
            Self::Email => &record.email,
            Self::City => record.city(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub key: ColumnKey,
    pub label: &'static str,
    /// Render search matches in this column highlighted.
    pub highlight: bool,
    /// `Some` when clicking the header sorts by this column.
    pub sort_key: Option<SortKey>,
}

impl ColumnDef {
    /// Header text, with an arrow on the active sort column.
    pub fn header_label(&self, params: &ViewParams) -> String {
        match self
            .sort_key
            .and_then(|key| params.sort_direction_of(key))
        {
            Some(direction) => format!("{} {}", self.label, direction.arrow()),
            None => self.label.to_owned(),
        }
    }
}

pub const USER_COLUMNS: [ColumnDef; 3] = [
    ColumnDef {
        key: ColumnKey::Name,
        label: "Name",
        highlight: true,
        sort_key: Some(SortKey::Name),
    },
    ColumnDef {
        key: ColumnKey::Email,
        label: "Email",
        highlight: true,
        sort_key: Some(SortKey::Email),
    },
    ColumnDef {
        key: ColumnKey::City,
        label: "City",
        highlight: false,
        sort_key: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ViewAction;

    #[test]
    fn cells_read_the_matching_field() {
        let record = UserRecord::new(7, "Amy", "a@x.com", "LA");
        let texts: Vec<&str> = USER_COLUMNS
            .iter()
            .map(|column| column.key.cell_text(&record))
            .collect();
        assert_eq!(texts, vec!["Amy", "a@x.com", "LA"]);

        let no_address = UserRecord {
            address: None,
            ..record
        };
        assert_eq!(ColumnKey::City.cell_text(&no_address), "");
    }

    #[test]
    fn header_labels_follow_the_sort() {
        let [name, email, city] = USER_COLUMNS;
        let params = ViewParams::default();
        assert_eq!(name.header_label(&params), "Name");

        let asc = params.reduce(ViewAction::ToggleSort(SortKey::Name), 1);
        assert_eq!(name.header_label(&asc), "Name ▲");
        assert_eq!(email.header_label(&asc), "Email");

        let desc = asc.reduce(ViewAction::ToggleSort(SortKey::Name), 1);
        assert_eq!(name.header_label(&desc), "Name ▼");
        assert_eq!(city.header_label(&desc), "City");
    }
}
