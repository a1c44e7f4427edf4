use chrono::NaiveDate;

use super::AuthorId;

/// 著者
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub birth_date: NaiveDate,
    pub nationality: String,
}

/// 著者の作成・更新に使う入力値
///
/// 更新は全項目の置き換えとなる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorDetails {
    pub name: String,
    pub birth_date: NaiveDate,
    pub nationality: String,
}

impl Author {
    /// 採番済みIDと入力値から著者を組み立てる
    pub fn from_details(id: AuthorId, details: AuthorDetails) -> Self {
        Self {
            id,
            name: details.name,
            birth_date: details.birth_date,
            nationality: details.nationality,
        }
    }

    /// IDを除く全項目を入力値で置き換える
    pub fn replace_with(&mut self, details: AuthorDetails) {
        self.name = details.name;
        self.birth_date = details.birth_date;
        self.nationality = details.nationality;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(name: &str) -> AuthorDetails {
        AuthorDetails {
            name: name.to_string(),
            birth_date: NaiveDate::from_ymd_opt(1947, 9, 21).unwrap(),
            nationality: "American".to_string(),
        }
    }

    #[test]
    fn test_replace_with_keeps_id() {
        let mut author = Author::from_details(AuthorId::new(3), details("Stephen King"));

        author.replace_with(AuthorDetails {
            nationality: "British".to_string(),
            ..details("Richard Bachman")
        });

        assert_eq!(author.id, AuthorId::new(3));
        assert_eq!(author.name, "Richard Bachman");
        assert_eq!(author.nationality, "British");
    }
}
