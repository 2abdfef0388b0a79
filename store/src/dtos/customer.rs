/// Fields required to create a customer. Email format is checked at the API
/// boundary, not here.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub email: String,
    pub company_name: String,
}
