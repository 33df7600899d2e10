mod add_restaurant;
mod all;
mod dashboard;
mod footer;
mod log;
mod notification;

use self::log::log;
use super::*;
use add_restaurant::add_restaurant;
use dashboard::dashboard;
use footer::footer;
use notification::notification;

pub use all::all as render;
