use crate::constants::REQUEST_ID_LENGTH;

/// Generates a short correlation id for request log lines.
///
/// The id is made of uppercase letters and digits, generated with
/// `nanoid`, and is only used to tie together the log lines produced by a
/// single call.
///
/// # Examples
/// ```
/// use loan_client::utils::id::request_id;
/// let id = request_id();
/// assert_eq!(id.len(), 12);
/// ```
#[must_use]
pub fn request_id() -> String {
    let alphabet: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect();
    nanoid::nanoid!(REQUEST_ID_LENGTH, &alphabet)
}
