/// Insert payload for a new account. The billing customer id is intentionally
/// absent: every row starts with an empty billing linkage and the provisioning
/// flow attaches it afterwards.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub picture_url: String,
}
