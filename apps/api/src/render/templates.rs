// Built-in HTML resume templates. Placeholders ({name}, {job_title_block},
// {contact_block}, {sections}) are substituted by the renderer; literal CSS
// braces are left untouched because substitution is plain string replace.

pub const RESUME_MODERN_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{name} | Resume</title>
<style>
  body { font-family: "Helvetica Neue", Arial, sans-serif; color: #222; margin: 2.5rem auto; max-width: 48rem; line-height: 1.45; }
  header { border-bottom: 3px solid #2b6cb0; padding-bottom: 0.75rem; margin-bottom: 1.5rem; }
  h1 { margin: 0; font-size: 2rem; }
  .job-title { margin: 0.25rem 0 0; font-size: 1.1rem; color: #2b6cb0; }
  .contact { margin: 0.5rem 0 0; font-size: 0.9rem; color: #555; }
  h2 { font-size: 1.15rem; text-transform: uppercase; letter-spacing: 0.05em; color: #2b6cb0; margin-bottom: 0.5rem; }
  ul { list-style: none; padding: 0; margin: 0 0 1.25rem; }
  li { margin-bottom: 0.6rem; }
  .primary { font-weight: 600; }
  .timeline { color: #777; font-size: 0.9rem; }
  .description { margin: 0.15rem 0 0; font-size: 0.92rem; color: #444; }
</style>
</head>
<body>
<header>
  <h1>{name}</h1>
{job_title_block}{contact_block}</header>
{sections}</body>
</html>
"#;

pub const RESUME_CLASSIC_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{name} | Resume</title>
<style>
  body { font-family: Georgia, "Times New Roman", serif; color: #1a1a1a; margin: 2.5rem auto; max-width: 46rem; line-height: 1.5; }
  header { text-align: center; margin-bottom: 1.75rem; }
  h1 { margin: 0; font-size: 1.8rem; font-variant: small-caps; }
  .job-title { margin: 0.25rem 0 0; font-style: italic; }
  .contact { margin: 0.5rem 0 0; font-size: 0.9rem; }
  h2 { font-size: 1.05rem; border-bottom: 1px solid #1a1a1a; padding-bottom: 0.2rem; }
  ul { list-style: none; padding: 0; margin: 0 0 1.25rem; }
  li { margin-bottom: 0.55rem; }
  .primary { font-weight: bold; }
  .timeline { font-size: 0.9rem; }
  .description { margin: 0.15rem 0 0; font-size: 0.92rem; }
</style>
</head>
<body>
<header>
  <h1>{name}</h1>
{job_title_block}{contact_block}</header>
{sections}</body>
</html>
"#;
