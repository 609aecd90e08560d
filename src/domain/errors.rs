use custom_error::custom_error;

custom_error! {
///! Custom error for malformed capture-form inputs.
pub MalformedInput
    InvalidEmail{email:String} = "Invalid email: {email}",
    InvalidPageUrl{url:String} = "Invalid page url: {url}",
}
