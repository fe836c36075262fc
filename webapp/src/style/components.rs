pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-md);
  font-weight: 600;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
}

.btn:active {
  transform: translateY(1px);
}

.btn:disabled {
  opacity: 0.5;
  cursor: default;
}

.btn-primary {
  background-color: var(--primary);
  color: white;
}

.btn-primary:hover {
  background-color: var(--primary-dark);
}

.btn-secondary {
  background-color: var(--surface-raised);
  color: var(--text-primary);
}

.btn-sm {
  padding: var(--space-1) var(--space-3);
  font-size: 0.875rem;
}

.btn-lg {
  padding: var(--space-3) var(--space-6);
  font-size: 1.125rem;
}

.btn-close {
  position: absolute;
  top: var(--space-3);
  right: var(--space-3);
  background: none;
  border: none;
  color: var(--text-secondary);
  font-size: 1.75rem;
  line-height: 1;
  cursor: pointer;
}

/* Overlays */
.modal-overlay {
  position: fixed;
  inset: 0;
  background-color: rgba(0, 0, 0, 0.75);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 100;
  animation: fade-in var(--transition-normal) var(--easing-standard);
}

#lightbox {
  z-index: 200;
}

.modal-content {
  position: relative;
  background-color: var(--surface);
  border-radius: var(--radius-xl);
  box-shadow: var(--shadow-lg);
  padding: var(--space-8);
  max-width: 720px;
  width: 90%;
  max-height: 90vh;
  overflow-y: auto;
}

.modal-title {
  font-size: 1.5rem;
  margin-bottom: var(--space-4);
}

.images-header {
  display: flex;
  justify-content: space-between;
  align-items: baseline;
  margin: var(--space-6) 0 var(--space-3);
}

.images-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(150px, 1fr));
  gap: var(--space-3);
}

.modal-image {
  width: 100%;
  border-radius: var(--radius-md);
  cursor: zoom-in;
  opacity: 0;
  animation: rise-in var(--transition-normal) var(--easing-standard) forwards;
}

.lightbox-content {
  background: none;
  box-shadow: none;
  display: flex;
  align-items: center;
  gap: var(--space-4);
  max-width: 95vw;
}

.lightbox-img {
  max-width: 80vw;
  max-height: 80vh;
  border-radius: var(--radius-md);
}

.lightbox-nav {
  background: rgba(255, 255, 255, 0.1);
  color: white;
  border: none;
  border-radius: var(--radius-full);
  width: 48px;
  height: 48px;
  font-size: 2rem;
  cursor: pointer;
}

.lightbox-position {
  position: absolute;
  bottom: calc(-1 * var(--space-8));
  left: 50%;
  transform: translateX(-50%);
  color: var(--text-secondary);
}

/* Prices */
.free {
  color: var(--secondary);
  font-weight: 700;
}

.paid {
  color: var(--primary-light);
  font-weight: 700;
}

/* Empty states */
.no-projects,
.no-projects-message,
.no-products,
.no-reviews {
  grid-column: 1 / -1;
  text-align: center;
  color: var(--text-tertiary);
  padding: var(--space-12) 0;
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes rise-in {
  from { opacity: 0; transform: translateY(16px); }
  to { opacity: 1; transform: translateY(0); }
}
"#;
