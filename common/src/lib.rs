#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct Greeting {
    pub message: String,
}

#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}
