pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color system: dark stage, purple-to-pink brand gradient */
  --primary: #A855F7;
  --primary-light: #C084FC;
  --primary-dark: #7E22CE;
  --accent: #EC4899;
  --brand-gradient: linear-gradient(to right, var(--primary), var(--accent));

  --background: #000000;
  --surface: rgba(255, 255, 255, 0.05);
  --surface-raised: rgba(0, 0, 0, 0.9);

  --text-primary: #FFFFFF;
  --text-secondary: #D1D5DB;
  --text-tertiary: #9CA3AF;

  --border: rgba(255, 255, 255, 0.2);
  --error: #EF4444;

  /* Layout */
  --header-height: 64px;
  --container-width: 1280px;

  /* Spacing */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-20: 80px;

  /* Radii */
  --radius-md: 8px;
  --radius-lg: 16px;
  --radius-full: 9999px;
}
"#;
