use serde::{Deserialize, Serialize};

use crate::domain::types::{Rating, TestimonialId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Testimonial {
    pub id: TestimonialId,
    pub text: String,
    pub rating: Rating,
    pub author: TestimonialAuthor,
    #[serde(default)]
    pub results: Vec<ResultHighlight>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestimonialAuthor {
    pub name: String,
    pub position: String,
    pub company: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultHighlight {
    pub value: String,
    pub label: String,
}

/// Envelope returned by `/api/testimonials`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestimonialList {
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}
