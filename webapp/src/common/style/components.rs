pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border: none;
  border-radius: var(--radius-full);
  font-weight: 600;
  font-size: 1rem;
  color: var(--text-primary);
  cursor: pointer;
  transition: opacity 0.2s ease;
}

.btn-primary {
  background: var(--brand-gradient);
}

.btn-primary:hover {
  opacity: 0.9;
}

.btn-primary:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-outline {
  background: transparent;
  border: 2px solid var(--primary);
}

.btn-outline:hover {
  background: rgba(168, 85, 247, 0.1);
}

.btn-lg {
  padding: var(--space-3) var(--space-8);
  font-size: 1.125rem;
}

/* Header and navigation */
.app-header {
  position: fixed;
  width: 100%;
  z-index: 50;
  background-color: rgba(0, 0, 0, 0.8);
  backdrop-filter: blur(4px);
  border-bottom: 1px solid rgba(255, 255, 255, 0.1);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  max-width: var(--container-width);
  margin: 0 auto;
  align-items: center;
  justify-content: space-between;
  padding: 0 var(--space-4);
}

.logo-link {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.logo-mark {
  color: var(--primary);
}

.logo-text {
  font-weight: 700;
  font-size: 1.25rem;
  background: var(--brand-gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-6);
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
}

.nav-link:hover {
  color: var(--primary-light);
}

.nav-link.active {
  color: var(--primary);
}

.menu-toggle {
  display: none;
  background: none;
  border: none;
  color: var(--text-primary);
  font-size: 1.5rem;
  cursor: pointer;
}

.mobile-menu {
  display: none;
  flex-direction: column;
  gap: var(--space-1);
  padding: var(--space-2) var(--space-4) var(--space-3);
}

.mobile-link {
  display: block;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-md);
  color: var(--text-secondary);
}

.mobile-link:hover {
  background: rgba(168, 85, 247, 0.1);
}

.mobile-book {
  width: 100%;
}

@media (max-width: 768px) {
  .nav-links { display: none; }
  .menu-toggle { display: block; }
  .mobile-menu { display: flex; }
}

/* Footer */
.app-footer {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-8) var(--space-4);
  border-top: 1px solid rgba(255, 255, 255, 0.1);
  color: var(--text-tertiary);
}

.footer-links {
  display: flex;
  gap: var(--space-6);
}

/* Main column */
.page-main {
  min-height: 100vh;
}

.page-container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: calc(var(--header-height) + var(--space-12)) var(--space-4) var(--space-12);
}

.page-title {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: var(--space-8);
  background: var(--brand-gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.section-title {
  font-size: 1.875rem;
  font-weight: 700;
  margin-bottom: var(--space-6);
}

/* Modal overlay shell */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.8);
  backdrop-filter: blur(4px);
}

.modal-content {
  position: relative;
  width: 100%;
  max-width: 720px;
  max-height: 90vh;
  margin: 0 var(--space-4);
  overflow-y: auto;
  background: var(--surface-raised);
  border-radius: var(--radius-lg);
}

.modal-header {
  position: sticky;
  top: 0;
  display: flex;
  justify-content: flex-end;
  padding: var(--space-4) var(--space-4) 0;
  background: var(--surface-raised);
}

.btn-close {
  background: none;
  border: none;
  color: rgba(255, 255, 255, 0.6);
  font-size: 1.5rem;
  cursor: pointer;
}

.btn-close:hover {
  color: var(--text-primary);
}

.modal-body {
  padding: var(--space-6);
}

.modal-title {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: var(--space-6);
  text-align: center;
  background: var(--brand-gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

/* Forms */
.booking-form {
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
}

.booking-form label {
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
}

.booking-form input,
.booking-form select,
.booking-form textarea {
  width: 100%;
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background: var(--surface);
  color: var(--text-primary);
  font-size: 1rem;
}

.booking-form input:focus,
.booking-form select:focus,
.booking-form textarea:focus {
  outline: 2px solid var(--primary);
  border-color: transparent;
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-4);
}

.form-error {
  color: var(--error);
  font-size: 0.875rem;
}

.btn-submit {
  width: 100%;
  margin-top: var(--space-2);
}

.booking-confirmation {
  text-align: center;
}

.booking-confirmation p {
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
}

/* Embedded players */
.mix-frame {
  width: 100%;
  height: 120px;
  border: none;
  border-radius: var(--radius-md);
}

.player-frame {
  width: 100%;
  height: 180px;
  border: none;
  border-radius: var(--radius-md);
}

.player-frame-hidden {
  display: none;
}

.player-loading {
  text-align: center;
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
}
"#;
