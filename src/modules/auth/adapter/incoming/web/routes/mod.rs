mod login_user;
mod logout_user;
mod refresh_token;
mod register_user;

pub use login_user::{login_user_handler, LoginResponse, LoginUserInfo};
pub use logout_user::{logout_user_handler, LogoutResponseBody};
pub use refresh_token::{refresh_token_handler, RefreshTokenRequestDto, RefreshTokenResponseBody};
pub use register_user::{register_user_handler, RegisterUserResponse};

#[doc(hidden)]
pub use login_user::__path_login_user_handler;
#[doc(hidden)]
pub use logout_user::__path_logout_user_handler;
#[doc(hidden)]
pub use refresh_token::__path_refresh_token_handler;
#[doc(hidden)]
pub use register_user::__path_register_user_handler;
