pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #D97706;          /* Warm amber, the builder accent */
  --primary-light: #F59E0B;
  --primary-dark: #B45309;
  --secondary: #10B981;        /* Free items */
  --accent: #7C3AED;

  /* Neutrals */
  --neutral-50: #FAFAF9;
  --neutral-100: #F5F5F4;
  --neutral-200: #E7E5E4;
  --neutral-300: #D6D3D1;
  --neutral-400: #A8A29E;
  --neutral-500: #78716C;
  --neutral-600: #57534E;
  --neutral-700: #44403C;
  --neutral-800: #292524;
  --neutral-900: #1C1917;

  --background: var(--neutral-900);
  --surface: var(--neutral-800);
  --surface-raised: var(--neutral-700);

  --text-primary: var(--neutral-50);
  --text-secondary: var(--neutral-300);
  --text-tertiary: var(--neutral-400);

  --border: var(--neutral-700);

  /* Layout */
  --header-height: 64px;
  --container-width: 1200px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;

  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-xl: 12px;
  --radius-full: 9999px;

  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.3);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.4);

  --transition-fast: 150ms;
  --transition-normal: 250ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}"#;
