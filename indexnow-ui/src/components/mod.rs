mod key_input;
mod result_banner;
mod submit_button;
mod url_list_input;

pub use key_input::KeyInput;
pub use result_banner::ResultBanner;
pub use submit_button::SubmitButton;
pub use url_list_input::UrlListInput;
