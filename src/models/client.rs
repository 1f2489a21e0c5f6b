use super::phone::parse_phones;

/// A row of the `client` table.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// A client together with every phone number registered to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRecord {
    pub client: Client,
    pub phones: Vec<String>,
}

impl ClientRecord {
    pub fn id(&self) -> i32 {
        self.client.id
    }

    /// "Last First" as printed by the demo.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.client.last_name, self.client.first_name)
    }
}

/// Fields to change on an existing client. `None` leaves a field untouched.
///
/// Blank values count as not supplied. When `phones` holds at least one
/// number, the client's phones are replaced by the parsed list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phones: Option<String>,
}

impl ClientChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn phones(mut self, value: impl Into<String>) -> Self {
        self.phones = Some(value.into());
        self
    }

    /// Trimmed, non-blank column assignments in `client`, in table order.
    pub(crate) fn columns(&self) -> Vec<(&'static str, &str)> {
        [
            ("first_name", criterion(&self.first_name)),
            ("last_name", criterion(&self.last_name)),
            ("email", criterion(&self.email)),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.map(|v| (column, v)))
        .collect()
    }

    /// The replacement phone list, or `None` when no number was given.
    pub(crate) fn phone_list(&self) -> Option<Vec<String>> {
        self.phones
            .as_deref()
            .map(parse_phones)
            .filter(|phones| !phones.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.columns().is_empty() && self.phone_list().is_none()
    }
}

/// Search criteria for `find_client`. Supplied criteria are combined with AND.
///
/// Criteria are trimmed and blank ones are ignored, matching how values are
/// stored on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ClientFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn phone(mut self, value: impl Into<String>) -> Self {
        self.phone = Some(value.into());
        self
    }

    /// Copy with every criterion trimmed and blank criteria dropped.
    pub fn normalized(&self) -> Self {
        Self {
            first_name: criterion(&self.first_name).map(str::to_string),
            last_name: criterion(&self.last_name).map(str::to_string),
            email: criterion(&self.email).map(str::to_string),
            phone: criterion(&self.phone).map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        [&self.first_name, &self.last_name, &self.email, &self.phone]
            .into_iter()
            .all(|value| criterion(value).is_none())
    }
}

fn criterion(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_table_order() {
        let changes = ClientChanges::new().email("a@b.c").first_name("Ivan");
        assert_eq!(changes.columns(), vec![("first_name", "Ivan"), ("email", "a@b.c")]);
    }

    #[test]
    fn phones_only_change_has_no_columns() {
        let changes = ClientChanges::new().phones("111, 222");
        assert!(changes.columns().is_empty());
        assert!(!changes.is_empty());
        assert_eq!(changes.phone_list(), Some(vec!["111".to_string(), "222".to_string()]));
    }

    #[test]
    fn blank_changes_count_as_absent() {
        let changes = ClientChanges::new().last_name("  ").phones(" , ");
        assert!(changes.columns().is_empty());
        assert_eq!(changes.phone_list(), None);
        assert!(changes.is_empty());

        let padded = ClientChanges::new().first_name(" Ivan ");
        assert_eq!(padded.columns(), vec![("first_name", "Ivan")]);
    }

    #[test]
    fn filter_is_trimmed_and_blanks_dropped() {
        let filter = ClientFilter::new().last_name(" Petrov ").first_name("").phone(" 111 ");
        assert_eq!(
            filter.normalized(),
            ClientFilter {
                first_name: None,
                last_name: Some("Petrov".into()),
                email: None,
                phone: Some("111".into()),
            }
        );
        assert!(ClientFilter::new().last_name("").email("   ").is_empty());
    }

    #[test]
    fn empty_builders() {
        assert!(ClientChanges::new().is_empty());
        assert!(ClientFilter::new().is_empty());
        assert!(!ClientFilter::new().phone("1").is_empty());
    }

    #[test]
    fn full_name_is_last_then_first() {
        let record = ClientRecord {
            client: Client {
                id: 1,
                first_name: "Тимофей".into(),
                last_name: "Еремеев".into(),
                email: "timofey1982@mail.ru".into(),
            },
            phones: Vec::new(),
        };
        assert_eq!(record.full_name(), "Еремеев Тимофей");
        assert_eq!(record.id(), 1);
    }
}
