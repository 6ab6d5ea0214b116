//! # Catalog
//!
//! The static list of projects sold by the store, lookup by id and text/category
//! filtering. [`search::DebouncedSearch`] wraps the filter for search-as-you-type.

pub mod search;

pub use search::DebouncedSearch;

use crate::model::{CartItemInput, ItemId};
use rust_decimal::Decimal;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Web,
    App,
    Dashboard,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::App => "app",
            Category::Dashboard => "dashboard",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category dropdown value. `all` matches everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "" => Ok(CategoryFilter::All),
            "web" => Ok(CategoryFilter::Only(Category::Web)),
            "app" => Ok(CategoryFilter::Only(Category::App)),
            "dashboard" => Ok(CategoryFilter::Only(Category::Dashboard)),
            other => Err(format!("unknown category '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
    pub category: Category,
    pub tech: Vec<String>,
    pub features: Vec<String>,
}

impl Product {
    fn new(
        id: u32,
        title: &str,
        description: &str,
        price: i64,
        category: Category,
        tech: &[&str],
        features: &[&str],
    ) -> Self {
        Self {
            id: ItemId(id),
            title: title.to_string(),
            description: description.to_string(),
            price: Decimal::new(price, 0),
            image: format!("assets/img/project-{id}.jpg"),
            category,
            tech: tech.iter().map(|t| t.to_string()).collect(),
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Case-insensitive substring match on title or description.
    pub fn matches_text(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.title.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}

impl From<&Product> for CartItemInput {
    fn from(product: &Product) -> Self {
        CartItemInput {
            id: product.id,
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

/// Read-only product list. Order is display order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The six projects the store ships with.
    pub fn standard() -> Self {
        Self::new(vec![
            Product::new(
                1,
                "E-Commerce Platform",
                "Full-featured online store with payment integration, inventory management, and admin dashboard",
                299,
                Category::Web,
                &["React", "Node.js", "MongoDB", "Stripe"],
                &["Payment Integration", "Admin Panel", "Responsive Design", "SEO Optimized"],
            ),
            Product::new(
                2,
                "Portfolio Website Template",
                "Modern, animated portfolio template perfect for showcasing your work and skills",
                99,
                Category::Web,
                &["HTML", "CSS", "JavaScript", "GSAP"],
                &["Smooth Animations", "Dark Mode", "Contact Form", "Blog Section"],
            ),
            Product::new(
                3,
                "Task Management App",
                "Collaborative task manager with real-time updates, team features, and analytics",
                199,
                Category::App,
                &["Vue.js", "Firebase", "Vuex", "Chart.js"],
                &["Real-time Sync", "Team Collaboration", "Analytics Dashboard", "Mobile Responsive"],
            ),
            Product::new(
                4,
                "Social Media Dashboard",
                "Analytics dashboard for tracking social media metrics across multiple platforms",
                249,
                Category::Dashboard,
                &["React", "D3.js", "Express", "PostgreSQL"],
                &["Multi-platform Support", "Custom Reports", "Data Visualization", "API Integration"],
            ),
            Product::new(
                5,
                "Restaurant Booking System",
                "Complete reservation system with table management, customer notifications, and reporting",
                349,
                Category::Web,
                &["Laravel", "MySQL", "Vue.js", "Twilio"],
                &["Table Management", "SMS Notifications", "Customer Database", "Booking Calendar"],
            ),
            Product::new(
                6,
                "Fitness Tracker Mobile App",
                "Cross-platform fitness app with workout tracking, nutrition logging, and progress charts",
                279,
                Category::App,
                &["React Native", "Redux", "Node.js", "MongoDB"],
                &["Workout Plans", "Nutrition Tracking", "Progress Charts", "Social Features"],
            ),
        ])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: ItemId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products matching both the search term and the category, in display order.
    pub fn filter<'a>(
        &'a self,
        term: &'a str,
        category: CategoryFilter,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        self.products
            .iter()
            .filter(move |p| category.matches(p.category) && p.matches_text(term))
    }
}
