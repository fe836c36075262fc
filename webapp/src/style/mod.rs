use constcat::concat;

mod components;
mod variables;

pub use components::BASE_COMPONENTS;
pub use variables::CSS_VARIABLES;

pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: var(--primary-light);
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
/* Screens */
.screen {
  display: none;
  min-height: 100vh;
}

.screen.active {
  display: block;
}

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.screen-header {
  display: flex;
  align-items: center;
  gap: var(--space-4);
  padding: var(--space-6) 0;
}

.hero {
  text-align: center;
  padding: var(--space-16) var(--space-4);
}

.hero-title {
  font-size: 3rem;
  font-weight: 700;
  letter-spacing: -0.02em;
}

.hero-subtitle {
  color: var(--text-secondary);
  font-size: 1.25rem;
  margin: var(--space-4) 0 var(--space-8);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
  justify-content: center;
}

/* Header and navigation */
.header {
  position: sticky;
  top: 0;
  z-index: 10;
  background-color: var(--surface);
  box-shadow: var(--shadow-md);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
}

.logo {
  font-weight: 700;
  font-size: 1.25rem;
  cursor: pointer;
}

.nav-links {
  display: flex;
  gap: var(--space-3);
}

.nav-link {
  color: var(--text-secondary);
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
}

.nav-link.active {
  color: var(--primary-light);
  background-color: rgba(217, 119, 6, 0.15);
}

.section-title {
  font-size: 1.75rem;
  margin-bottom: var(--space-6);
}

section {
  padding: var(--space-12) 0;
}

/* Style selection */
.styles-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: var(--space-4);
}

.style-card {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  padding: var(--space-6);
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
}

.style-card.selected {
  outline: 2px solid var(--primary-light);
}

.style-blurb {
  font-weight: 400;
  opacity: 0.85;
}

/* Cards */
.projects-grid,
.products-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: var(--space-6);
}

.projects-list {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
}

.project-card,
.project-item,
.product-card {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  overflow: hidden;
  opacity: 0;
  animation: rise-in var(--transition-normal) var(--easing-standard) forwards;
}

.project-item,
.product-card {
  cursor: pointer;
}

.project-item {
  display: flex;
  gap: var(--space-4);
}

.project-thumbnail,
.project-item-image,
.product-image {
  width: 100%;
  display: block;
  object-fit: cover;
}

.project-item-image {
  width: 240px;
}

.project-info,
.project-item-info,
.product-info {
  padding: var(--space-4);
}

.project-type {
  display: inline-block;
  font-size: 0.75rem;
  text-transform: uppercase;
  padding: var(--space-1) var(--space-2);
  border-radius: var(--radius-full);
  background-color: var(--surface-raised);
}

/* Reviews marquee */
.reviews-slider {
  overflow: hidden;
}

.reviews-track {
  display: flex;
  gap: var(--space-4);
  width: max-content;
  animation: marquee 40s linear infinite;
}

.review-card {
  width: 320px;
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  padding: var(--space-6);
}

.review-stars {
  color: var(--primary-light);
}

.review-author {
  color: var(--text-tertiary);
  margin-top: var(--space-2);
}

@keyframes marquee {
  from { transform: translateX(0); }
  to { transform: translateX(-50%); }
}

/* FAQ */
.faq-item {
  border-bottom: 1px solid var(--border);
}

.faq-question {
  display: flex;
  justify-content: space-between;
  padding: var(--space-4) 0;
  cursor: pointer;
}

.faq-answer {
  display: none;
  color: var(--text-secondary);
  padding-bottom: var(--space-4);
}

.faq-item.active .faq-answer {
  display: block;
}

.contact-handle {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  margin-top: var(--space-4);
}
"#
);
