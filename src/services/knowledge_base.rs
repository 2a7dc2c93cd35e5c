/*!
 * Knowledge-base question answering over a PDF document.
 *
 * The document arrives as uploaded bytes or as a URL to fetch. Its text is
 * extracted and handed to the completion backend together with the question
 * in a single prompt.
 */

use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::GatewayError;
use crate::file_utils::{fetch_document, FileSource};
use crate::providers::CompletionModel;

/// One or more questions, accepted as a single string or a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Questions {
    /// A single question
    One(String),
    /// Several questions asked together
    Many(Vec<String>),
}

impl Questions {
    /// Normalize to a single newline-joined question text.
    pub fn into_text(self) -> String {
        match self {
            Self::One(question) => question.trim().to_string(),
            Self::Many(questions) => questions
                .iter()
                .map(|q| q.trim())
                .filter(|q| !q.is_empty())
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// A knowledge-base request
#[derive(Debug)]
pub struct AskRequest {
    /// The question(s) to answer
    pub question: Questions,
    /// Uploaded PDF, if any
    pub file: Option<FileSource>,
    /// URL of a PDF to fetch, used when no file is uploaded
    pub pdf_url: Option<String>,
}

/// A knowledge-base response
#[derive(Debug, Serialize, PartialEq)]
pub struct AskResponse {
    /// The model's answer
    pub answer: String,
}

/// Build the question-answering prompt over the extracted document text.
pub fn qa_prompt(document_text: &str, question: &str) -> String {
    format!(
        "Answer the question using only the information in the following document.\n\nDocument:\n{document_text}\n\nQuestion:\n{question}\n\nAnswer:"
    )
}

/// Extract plain text from PDF bytes.
fn extract_pdf_text(bytes: &[u8]) -> Result<String, GatewayError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|_| GatewayError::UnsupportedInput)
}

/// Handle a knowledge-base request.
pub async fn handle(
    model: &dyn CompletionModel,
    request: AskRequest,
) -> Result<AskResponse, GatewayError> {
    let question = request.question.into_text();
    if question.is_empty() || (request.file.is_none() && request.pdf_url.is_none()) {
        return Err(GatewayError::Validation("Invalid request"));
    }

    let bytes = match (&request.file, &request.pdf_url) {
        (Some(source), _) => source.resolve()?,
        (None, Some(url)) => fetch_document(url).await?,
        (None, None) => unreachable!("validated above"),
    };

    let document_text = extract_pdf_text(&bytes)?;
    info!(
        "Answering question against a {} character document",
        document_text.len()
    );

    let prompt = qa_prompt(&document_text, &question);
    let answer = model.complete(&prompt).await?;

    Ok(AskResponse {
        answer: answer.trim().to_string(),
    })
}
