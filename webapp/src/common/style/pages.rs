pub const PAGE_STYLES: &str = r#"
/* Home */
.home-container {
  position: relative;
  min-height: 100vh;
}

.wave-canvas {
  position: fixed;
  inset: 0;
  width: 100%;
  height: 100%;
  z-index: -1;
}

.home-content {
  position: relative;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--header-height) var(--space-4) 0;
}

.hero {
  min-height: 80vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  gap: var(--space-6);
}

.hero-title {
  font-size: clamp(2.5rem, 8vw, 4.5rem);
  font-weight: 700;
  background: var(--brand-gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-subtitle {
  font-size: 1.375rem;
  color: var(--text-secondary);
  max-width: 42rem;
}

.hero-actions {
  display: flex;
  gap: var(--space-4);
}

.social-links {
  display: flex;
  gap: var(--space-6);
}

.social-link {
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-full);
  background: rgba(255, 255, 255, 0.1);
  color: var(--text-secondary);
  font-size: 0.875rem;
  transition: transform 0.2s ease;
}

.social-link:hover {
  background: rgba(255, 255, 255, 0.2);
  transform: scale(1.05);
}

/* About */
.about-section,
.mixes-section {
  padding: var(--space-20) 0;
}

.about-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-12);
  align-items: center;
}

.about-copy {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.about-copy p {
  color: var(--text-secondary);
  font-size: 1.125rem;
}

.feature-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-6);
}

.feature-card {
  padding: var(--space-6);
  border-radius: var(--radius-md);
  background: var(--surface);
  backdrop-filter: blur(4px);
}

.feature-card h3 {
  font-size: 1.125rem;
  margin-bottom: var(--space-2);
}

.feature-card p {
  color: var(--text-tertiary);
  font-size: 1rem;
}

.about-photo img {
  width: 100%;
  aspect-ratio: 1 / 1;
  object-fit: cover;
  border-radius: var(--radius-md);
}

/* Mixes */
.mixes-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-8);
}

.mix-column {
  padding: var(--space-6);
  border-radius: var(--radius-md);
  background: var(--surface);
  backdrop-filter: blur(4px);
}

.mix-column h3 {
  font-size: 1.25rem;
  margin-bottom: var(--space-4);
}

.mix-list {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  max-height: 600px;
  overflow-y: auto;
  padding-right: var(--space-4);
}

.mix-caption {
  font-size: 0.875rem;
  color: var(--text-tertiary);
  font-style: italic;
  margin-top: var(--space-2);
}

/* Blog */
.blog-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(340px, 1fr));
  gap: var(--space-8);
}

.blog-card {
  display: block;
  overflow: hidden;
  border-radius: var(--radius-lg);
  background: var(--surface);
  backdrop-filter: blur(4px);
  transition: transform 0.2s ease;
}

.blog-card:hover {
  transform: scale(1.02);
}

.blog-card-upcoming {
  border: 2px solid rgba(168, 85, 247, 0.5);
}

.blog-card-image {
  position: relative;
  height: 300px;
}

.blog-card-image img {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.badge-upcoming {
  position: absolute;
  top: var(--space-4);
  right: var(--space-4);
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  background: var(--primary);
  color: var(--text-primary);
  font-size: 0.875rem;
  font-weight: 600;
}

.blog-card-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  justify-content: flex-end;
  gap: var(--space-3);
  padding: var(--space-6);
  background: linear-gradient(to top, #000, rgba(0, 0, 0, 0.5), transparent);
}

.blog-card-meta {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.blog-card-teaser {
  padding: var(--space-6);
  color: var(--text-secondary);
}

/* Blog post detail */
.blog-post-image {
  width: 100%;
  max-height: 420px;
  object-fit: cover;
  border-radius: var(--radius-lg);
  margin-bottom: var(--space-8);
}

.blog-post-meta {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: var(--space-4);
  margin-bottom: var(--space-6);
  color: var(--text-secondary);
}

.blog-post-meta .badge-upcoming {
  position: static;
}

.blog-post-paragraph {
  color: var(--text-secondary);
  font-size: 1.125rem;
  margin-bottom: var(--space-4);
}

.blog-post .mix-frame {
  margin: var(--space-6) 0;
}

.blog-post-tracklist ol {
  padding-left: var(--space-6);
  color: var(--text-secondary);
  display: flex;
  flex-direction: column;
  gap: var(--space-1);
}

/* Contact */
.contact-copy {
  color: var(--text-secondary);
  font-size: 1.125rem;
  max-width: 42rem;
  margin-bottom: var(--space-8);
}

.contact-socials {
  margin-top: var(--space-12);
}

.contact-socials ul {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  color: var(--text-secondary);
}

@media (max-width: 900px) {
  .about-grid,
  .mixes-grid {
    grid-template-columns: 1fr;
  }

  .hero-actions {
    flex-direction: column;
  }
}
"#;
