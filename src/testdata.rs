//! HTML fixture with the production layout of the "Who We Are" page.
//!
//! The fragment constants appear verbatim inside [`PAGE`] so tests can break
//! one assumption at a time with `PAGE.replace(FRAGMENT, ...)`.

pub const LAC_TIME_P: &str = "<p>(10:00 am)</p>\n      <p><strong>LAC Executive Committee</strong></p>";
pub const LAC_TITLE_P: &str = "<p><strong>LAC Executive Committee</strong></p>";
pub const GENERAL_UL: &str = "<ul id=\"general\">\n    <li>Monday, March\u{a0}22 \u{2013} CANCELED</li>\n    <li>Monday, October 25</li>\n  </ul>";
pub const LAC_UL: &str = "<ul id=\"lac\">\n          <li>Wednesday,\u{a0}January\u{a0}6</li>\n        </ul>";
pub const REMOTE_P: &str = "<p>Until further notice, all meetings will be held remotely via Zoom.</p>";

pub const PAGE: &str = "<!DOCTYPE html>
<html>
<head><title>Who We Are | ACLA</title></head>
<body>
<div class=\"tabs\">
<div id=\"staff-tab\">
  <h2>Staff</h2>
  <p>Contact us at the office.</p>
  <ul><li>Director</li></ul>
</div>
<div id=\"board-tab\">
  <h2>Board</h2>
  <p>ACLA Board meetings (6:30 pm unless otherwise noted)</p>
  <ul id=\"board\">
    <li>Monday, February 22 \u{2013} BOARD RETREAT</li>
    <li>Monday, September 27</li>
  </ul>
  <p>General Membership meetings (7:00 pm)</p>
  <ul id=\"general\">
    <li>Monday, March\u{a0}22 \u{2013} CANCELED</li>
    <li>Monday, October 25</li>
  </ul>
  <p>(10:00 am)</p>
  <ul id=\"advisory\">
    <li>Thursday,\u{2003}January\u{2003}7</li>
    <li>Thursday, April 8</li>
    <li>* Dates are subject to change</li>
  </ul>
  <div class=\"lac\">
      <p>(10:00 am)</p>
      <p><strong>LAC Executive Committee</strong></p>
      <div class=\"lac-dates\">
        <ul id=\"lac\">
          <li>Wednesday,\u{a0}January\u{a0}6</li>
        </ul>
        <p>Until further notice, all meetings will be held remotely via Zoom.</p>
      </div>
  </div>
</div>
</div>
</body>
</html>
";
