//! Submission Endpoint

use reqwest::multipart::Form;
use reqwest::Method;

use super::{send_empty, ApiClient};
use crate::error::ApiResult;
use crate::submission::SubmissionForm;

impl ApiClient {
    /// `POST /submit-brand` as multipart form data
    pub async fn submit_brand(&self, form: &SubmissionForm) -> ApiResult<()> {
        let multipart = form
            .form_fields()
            .into_iter()
            .fold(Form::new(), |acc, (name, value)| acc.text(name, value));
        send_empty(self.request(Method::POST, "/submit-brand").multipart(multipart)).await
    }
}
