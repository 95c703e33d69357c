//! Global CSS styles for the portfolio page.
//!
//! Light values on `.page`, dark overrides on `.page.dark`. The palette
//! variables themselves come from [`super::colors::palette_css`]. Reveal
//! poses are plain CSS transitions keyed off the `revealed` class.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
.page {
  /* BRAND */
  --accent-soft: rgba(182, 237, 229, 0.2);

  /* SURFACES */
  --surface-solid: #ffffff;
  --nav-bg: rgba(255, 255, 255, 0.8);
  --track: #e5e7eb;

  /* TEXT */
  --text-heading: #1A1A1A;
  --text-muted: #4b5563;

  /* SEMANTIC */
  --success-bg: #dcfce7;

  /* Typography */
  --font-sans: 'Poppins', ui-sans-serif, system-ui, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-reveal: 600ms cubic-bezier(0.4, 0, 0.2, 1);
}

.page.dark {
  --surface-solid: #1f2937;
  --nav-bg: rgba(31, 41, 55, 0.8);
  --track: #374151;

  --text-heading: #ffffff;
  --text-muted: #9ca3af;

  --success-bg: rgba(20, 83, 45, 0.5);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

.page {
  min-height: 100vh;
  font-family: var(--font-sans);
  background: var(--bg);
  color: var(--text-heading);
  line-height: 1.6;
  transition: background var(--transition-normal), color var(--transition-normal);
}

a {
  color: inherit;
  text-decoration: none;
}

/* === Typography === */
.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: 3rem;
  color: var(--text-heading);
}

.card-title {
  font-size: 1.25rem;
  font-weight: 600;
  margin-bottom: 0.5rem;
  color: var(--text-heading);
}

.column-title {
  font-size: 1.5rem;
  font-weight: 600;
  text-align: center;
  margin-bottom: 1.5rem;
  color: var(--text-heading);
}

.body-text {
  font-size: 1.125rem;
  color: var(--text-body);
  margin-bottom: 1.5rem;
}

.body-text.large {
  font-size: 1.25rem;
  margin-bottom: 2rem;
}

/* === Reveal === */
.reveal {
  opacity: 0;
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.reveal-rise { transform: translateY(50px); }
.reveal-slide-left { transform: translateX(-50px); }
.reveal-slide-right { transform: translateX(50px); }
.reveal-grow { transform: scale(0.9); }
.reveal-fade { transform: none; }

.reveal.revealed {
  opacity: 1;
  transform: none;
}

/* === Buttons === */
.btn-primary,
.btn-accent,
.btn-gradient {
  display: inline-block;
  border: none;
  border-radius: 9999px;
  padding: 1rem 2rem;
  font-family: inherit;
  font-size: 1rem;
  font-weight: 600;
  cursor: pointer;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.btn-primary {
  background: var(--primary);
  color: #ffffff;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}

.btn-accent {
  background: var(--accent);
  color: var(--primary);
}

.btn-gradient {
  width: 100%;
  background: linear-gradient(to right, var(--accent), #14b8a6);
  color: var(--primary);
  font-weight: 700;
  font-size: 1.125rem;
}

.btn-primary:hover,
.btn-accent:hover {
  transform: scale(1.05);
}

.btn-gradient:hover {
  transform: scale(1.02);
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
}

.btn-gradient:active {
  transform: scale(0.98);
}

.btn-small {
  padding: 0.5rem 1rem;
}

.btn-ghost,
.icon-btn {
  border: none;
  border-radius: 9999px;
  padding: 0.5rem;
  background: rgba(229, 231, 235, 0.5);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.page.dark .icon-btn {
  background: rgba(55, 65, 81, 0.5);
}

.icon-btn:hover {
  background: var(--accent-soft);
}

/* === Navigation === */
.nav-bar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background: var(--nav-bg);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--border);
}

.nav-inner {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0.75rem 2rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.nav-brand {
  font-size: 1.5rem;
  font-weight: 700;
  transition: color var(--transition-fast);
}

.nav-links {
  display: flex;
  gap: 2rem;
}

.nav-link:hover,
.nav-brand:hover {
  color: var(--teal);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.language-badge {
  font-size: 0.875rem;
  background: var(--accent-soft);
  color: var(--teal);
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
}

@media (max-width: 768px) {
  .nav-links { display: none; }
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  justify-content: center;
  align-items: center;
  text-align: center;
  padding: 5rem 1rem 0;
  background: linear-gradient(to bottom right, var(--accent-soft), var(--bg));
}

.hero-inner {
  max-width: 56rem;
  margin: 0 auto;
}

.hero-card {
  margin-bottom: 2rem;
  padding: 2rem;
  border-radius: 1rem;
  background: var(--surface);
  border: 1px solid rgba(182, 237, 229, 0.3);
}

.hero-name {
  font-size: 4.5rem;
  font-weight: 700;
  margin-bottom: 1rem;
  background: linear-gradient(to right, var(--text-heading), var(--accent), var(--text-heading));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-headline {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.hero-affiliation {
  font-size: 1.125rem;
  margin-bottom: 1rem;
  opacity: 0.8;
}

.hero-tagline {
  font-size: 1.5rem;
  font-style: italic;
  font-weight: 300;
  color: var(--teal);
  margin-bottom: 2rem;
}

.hero-banner {
  display: inline-block;
  padding: 1.5rem;
  margin-bottom: 2rem;
  border-radius: 9999px;
  background: linear-gradient(to right, #2dd4bf, #3b82f6);
  color: #ffffff;
  font-weight: 700;
  font-size: 1.25rem;
  animation: pulse 2s ease-in-out infinite;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.75; }
}

.notice {
  margin-top: 1.5rem;
  padding: 1rem;
  border-radius: 0.75rem;
  background: var(--accent-soft);
  color: var(--text-heading);
}

/* === Sections === */
.page-sections {
  max-width: 80rem;
  margin: 0 auto;
  padding: 4rem 2rem;
  display: flex;
  flex-direction: column;
  gap: 6rem;
}

.page-section {
  scroll-margin-top: 5rem;
}

.about-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 3rem;
  align-items: center;
}

.about-art {
  height: 16rem;
  display: flex;
  justify-content: center;
  align-items: center;
  border-radius: 1rem;
  background: linear-gradient(to bottom right, var(--accent), var(--teal));
  font-size: 6rem;
}

.card-grid {
  display: grid;
  gap: 2rem;
}

.card-grid.two { grid-template-columns: repeat(2, 1fr); }
.card-grid.three { grid-template-columns: repeat(3, 1fr); }
.card-grid.four { grid-template-columns: repeat(4, 1fr); gap: 1.5rem; }
.card-grid.wide-gap { gap: 3rem; }
.card-grid.narrow { max-width: 56rem; margin: 0 auto; }

@media (max-width: 1024px) {
  .card-grid.three, .card-grid.four { grid-template-columns: repeat(2, 1fr); }
}

@media (max-width: 768px) {
  .about-grid, .card-grid.two, .card-grid.three, .card-grid.four {
    grid-template-columns: 1fr;
  }
}

.glass-card {
  padding: 1.5rem;
  border-radius: 0.75rem;
  background: var(--surface);
  border: 1px solid var(--border);
  backdrop-filter: blur(4px);
}

.lift.revealed:hover {
  transform: translateY(-5px) scale(1.05);
  box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
}

.card-icon {
  font-size: 2.25rem;
  margin-bottom: 1rem;
}

.card-dates {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--teal);
  margin-bottom: 1rem;
}

/* === Skills === */
.skill-column {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.skill-label {
  display: flex;
  justify-content: space-between;
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-body);
  margin-bottom: 0.5rem;
}

.skill-track {
  width: 100%;
  height: 0.75rem;
  border-radius: 9999px;
  background: var(--track);
  overflow: hidden;
}

.skill-fill {
  width: 0;
  height: 100%;
  border-radius: 9999px;
  background: linear-gradient(to right, var(--accent), #14b8a6);
  transition: width 1.5s ease;
}

.revealed .skill-fill {
  width: var(--skill-width);
}

/* === Tools === */
.tool-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
  max-width: 56rem;
  margin: 0 auto;
}

.tool-card {
  position: relative;
  overflow: hidden;
  padding: 1.5rem;
  text-align: center;
  border-radius: 0.75rem;
  background: var(--surface-solid);
  border: 1px solid var(--border);
  cursor: pointer;
  transition: transform var(--transition-normal), border-color var(--transition-normal), box-shadow var(--transition-normal);
}

.tool-card:hover {
  transform: scale(1.1) rotateY(5deg);
  border-color: var(--accent);
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
}

.tool-icon {
  width: 4rem;
  height: 4rem;
  margin: 0 auto 1rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 9999px;
  background: linear-gradient(to bottom right, var(--accent), var(--teal));
  font-size: 1.5rem;
}

.tool-name {
  font-size: 1.125rem;
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.tool-card:hover .tool-name {
  color: var(--teal);
}

.tool-caption {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 0.75rem;
  font-size: 0.875rem;
  color: var(--text-muted);
  background: rgba(0, 0, 0, 0.2);
  backdrop-filter: blur(4px);
  animation: caption-in var(--transition-normal) both;
}

@keyframes caption-in {
  from { opacity: 0; transform: translateY(10px); }
  to { opacity: 1; transform: none; }
}

/* === Process === */
.process-timeline {
  position: relative;
  max-width: 56rem;
  margin: 0 auto;
}

.process-line {
  position: absolute;
  left: 50%;
  width: 4px;
  height: 100%;
  transform: translateX(-50%);
  background: linear-gradient(to bottom, var(--accent), var(--teal));
}

.process-steps {
  display: flex;
  justify-content: center;
  gap: 3rem;
}

.process-step {
  flex: 1;
  text-align: center;
  position: relative;
}

.step-icon {
  width: 4rem;
  height: 4rem;
  margin: 0 auto 1rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 9999px;
  background: var(--accent);
  font-size: 1.5rem;
}

@media (max-width: 1024px) {
  .process-line { display: none; }
  .process-steps { flex-direction: column; }
}

/* === Achievements === */
.achievement-panel {
  max-width: 42rem;
  margin: 0 auto;
  padding: 2rem;
  border-radius: 0.75rem;
  background: var(--surface);
}

.achievement-list {
  list-style: disc inside;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  font-size: 1.125rem;
  color: var(--text-body);
}

.achievement.highlighted {
  font-weight: 600;
  color: var(--text-heading);
}

.slogan-list {
  list-style: circle;
  margin: 0.5rem 0 0 1.5rem;
  font-size: 0.875rem;
  font-weight: 500;
}

/* === Portfolio === */
.project-card {
  overflow: hidden;
  border-radius: 1rem;
  background: var(--surface-solid);
  border: 1px solid var(--border);
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
  cursor: pointer;
}

.project-card.revealed:hover {
  transform: translateY(-10px) scale(1.05);
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
}

.project-cover {
  height: 12rem;
  display: flex;
  align-items: center;
  justify-content: center;
  transition: transform 500ms ease;
}

.project-card:hover .project-cover {
  transform: scale(1.1);
}

.project-eye {
  padding: 1rem;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.2);
  font-size: 2.25rem;
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.project-card:hover .project-eye {
  opacity: 1;
}

.project-body {
  padding: 1.5rem;
}

.project-title {
  font-size: 1.25rem;
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.project-card:hover .project-title {
  color: var(--teal);
}

.project-desc {
  font-size: 0.875rem;
  color: var(--text-muted);
}

/* === Testimonials === */
.testimonial {
  padding: 2rem;
  border-radius: 1rem;
  border-left: 4px solid var(--accent);
  background: linear-gradient(to right, rgba(182, 237, 229, 0.1), rgba(204, 251, 241, 0.1));
  font-style: italic;
}

.testimonial.revealed:hover {
  transform: scale(1.05);
}

.testimonial-quote {
  font-size: 1.125rem;
  margin-bottom: 1rem;
  color: var(--text-body);
}

.testimonial-author {
  font-style: normal;
  font-weight: 600;
}

/* === Contact === */
.contact-panel {
  padding: 3rem;
  border-radius: 1.5rem;
  background: linear-gradient(to bottom right, rgba(182, 237, 229, 0.1), var(--surface));
}

.contact-intro {
  max-width: 42rem;
  margin: 0 auto 3rem;
  text-align: center;
}

.contact-form {
  max-width: 28rem;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.input-field {
  width: 100%;
  padding: 1rem;
  border-radius: 0.75rem;
  border: 2px solid #d1d5db;
  background: var(--surface-solid);
  color: var(--text-heading);
  font-family: inherit;
  font-size: 1rem;
  outline: none;
  transition: border-color var(--transition-fast);
}

.page.dark .input-field {
  border-color: #4b5563;
}

.input-field:focus {
  border-color: var(--accent);
}

.input-field.invalid,
.page.dark .input-field.invalid {
  border-color: var(--danger);
}

.input-field.textarea {
  resize: none;
}

.form-issue {
  text-align: center;
  font-weight: 600;
  color: var(--danger);
}

.form-sent {
  text-align: center;
  font-weight: 600;
  padding: 1rem;
  border-radius: 0.75rem;
  color: var(--success);
  background: var(--success-bg);
  animation: caption-in var(--transition-normal) both;
}

/* === Footer === */
.site-footer {
  margin-top: 6rem;
  padding: 3rem 0;
  border-top: 1px solid rgba(182, 237, 229, 0.2);
  background: rgba(26, 26, 26, 0.1);
}

.page.dark .site-footer {
  background: rgba(31, 41, 55, 0.5);
}

.footer-inner {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1rem;
  text-align: center;
}

.footer-title {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: 1rem;
}

.footer-quote {
  font-size: 1.125rem;
  font-weight: 300;
  font-style: italic;
  color: var(--teal);
}

.footer-links {
  display: flex;
  justify-content: center;
  gap: 1.5rem;
  margin-top: 2rem;
}

.footer-link {
  font-size: 1.5rem;
  transition: transform var(--transition-normal);
}

.footer-link:hover {
  transform: scale(1.1);
}

.footer-copyright {
  margin-top: 2rem;
  font-size: 0.875rem;
  color: var(--text-muted);
}
"#;
