use super::CustomerId;

/// 利用者
///
/// パスワードは一方向ハッシュのみを保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub password_hash: String,
}

/// 利用者の作成・更新に使う入力値（平文パスワードを含む）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub password: Option<String>,
}

/// ハッシュ化済みの新規利用者（永続化用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub password_hash: String,
}

impl CustomerDetails {
    /// 空でないパスワードが指定されている場合のみ返す
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }

    pub fn into_new_customer(self, password_hash: String) -> NewCustomer {
        NewCustomer {
            name: self.name,
            email: self.email,
            address: self.address,
            phone_number: self.phone_number,
            password_hash,
        }
    }
}

impl Customer {
    pub fn from_new(id: CustomerId, new: NewCustomer) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            address: new.address,
            phone_number: new.phone_number,
            password_hash: new.password_hash,
        }
    }

    /// 連絡先項目を置き換え、新しいハッシュがあればパスワードも差し替える
    ///
    /// `password_hash` が `None` の場合、保存済みのハッシュはそのまま残る。
    pub fn replace_with(&mut self, details: CustomerDetails, password_hash: Option<String>) {
        self.name = details.name;
        self.email = details.email;
        self.address = details.address;
        self.phone_number = details.phone_number;
        if let Some(hash) = password_hash {
            self.password_hash = hash;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(password: Option<&str>) -> CustomerDetails {
        CustomerDetails {
            name: "Hanako".to_string(),
            email: "hanako@example.com".to_string(),
            address: "1-2-3 Chiyoda".to_string(),
            phone_number: "0312345678".to_string(),
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn test_new_password_ignores_empty_string() {
        assert_eq!(details(None).new_password(), None);
        assert_eq!(details(Some("")).new_password(), None);
        assert_eq!(details(Some("secret")).new_password(), Some("secret"));
    }

    #[test]
    fn test_replace_with_without_hash_keeps_stored_hash() {
        let mut customer =
            Customer::from_new(CustomerId::new(1), details(None).into_new_customer("h1".into()));

        customer.replace_with(
            CustomerDetails {
                name: "Taro".to_string(),
                ..details(None)
            },
            None,
        );

        assert_eq!(customer.name, "Taro");
        assert_eq!(customer.password_hash, "h1");
    }
}
