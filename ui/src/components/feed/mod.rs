//! Feed components

mod comment_section;
mod media_carousel;
mod post_card;
mod post_form;

pub use comment_section::CommentSection;
pub use media_carousel::MediaCarousel;
pub use post_card::PostCard;
pub use post_form::PostForm;
