//! Fixture builders shared by state, render, and controller tests.

use crate::net::types::{Board, Thumbnail};

pub fn board(id: &str, name: &str) -> Board {
    Board { id: id.to_owned(), name: name.to_owned(), thumbnail_count: 0 }
}

pub fn thumb(id: &str, category: &str, favorite: bool) -> Thumbnail {
    Thumbnail {
        id: id.to_owned(),
        title: format!("Title {id}"),
        thumbnail_url: format!("https://img.youtube.com/vi/{id}/maxresdefault.jpg"),
        video_url: Some(format!("https://youtu.be/{id}")),
        category: category.to_owned(),
        favorite,
        created_at: None,
    }
}

pub fn thumb_created(id: &str, created_at: &str) -> Thumbnail {
    Thumbnail { created_at: Some(created_at.to_owned()), ..thumb(id, "general", false) }
}
