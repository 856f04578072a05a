//! Shared fixtures for LAS parser tests
//!
//! The fixtures follow the layout of real vendor files: column banners as
//! comments, ragged spacing, values containing dots and colons.

use std::path::Path;

use super::events::RecordingSink;
use super::parser::LasParser;
use super::stats::ParseResult;
use crate::Result;

mod parser_tests;

/// LAS 2.0 file, one line per depth step, with an OTHER block
pub const LAS2_UNWRAPPED: &str = r#"~VERSION INFORMATION
 VERS.                  2.0 :   CWLS LOG ASCII STANDARD -VERSION 2.0
 WRAP.                  NO  :   ONE LINE PER DEPTH STEP
~WELL INFORMATION BLOCK
#MNEM.UNIT       DATA TYPE    INFORMATION
#---------    -------------   ------------------------------
 STRT.M        1670.000000:
 STOP.M        1669.750000:
 STEP.M            -0.1250:
 NULL.           -999.2500:
 COMP.             ANY OIL COMPANY LTD.:   COMPANY
 WELL.      ANY ET AL OIL WELL #12:   WELL
 DATE.             13-DEC-86:   LOG DATE
~CURVE INFORMATION
 DEPT.M                      :  1  DEPTH
 DT  .US/M                   :  2  SONIC TRANSIT TIME
 RHOB.K/M3                   :  3  BULK DENSITY
 NPHI.V/V                    :  4  NEUTRON POROSITY
~PARAMETER INFORMATION
 BHT .DEGC             35.5000:   BOTTOM HOLE TEMPERATURE
 BS  .MM              200.0000:   BIT SIZE
~Other
     Note: The logging tools became stuck at 625 meters causing the data
     between 625 meters and 615 meters to be invalid.
~A  DEPTH     DT    RHOB        NPHI
1670.000   123.450 2550.000    0.450
1669.875   123.450 2550.000    0.450
1669.750   -999.2500 2550.000    0.450
"#;

/// LAS 2.0 file with wrapped records
pub const LAS2_WRAPPED: &str = r#"~Version Information
 VERS.    2.0:   CWLS log ASCII Standard -VERSION 2.0
 WRAP.    YES:   Multiple lines per depth step
~Well Information
 STRT.M   910.000000:
 NULL.    -999.2500:
~Curve Information
 DEPTH.M    : 1 DEPTH
 GR   .GAPI : 2 GAMMA RAY
 RHOB .K/M3 : 3 BULK DENSITY
 NPHI .V/V  : 4 NEUTRON
~A
 910.000000
 -999.2500 2692.7075 0.3140
 909.875000
 67.1 2712.6460 -999.25
"#;

/// LAS 3.0 file with comma-delimited data and two data sections
pub const LAS3_MULTI_SECTION: &str = "~Version\r\n\
VERS.  3.0 : CWLS LOG ASCII STANDARD -VERSION 3.0\r\n\
WRAP.  NO  : ONE LINE PER DEPTH STEP\r\n\
DLM .  COMMA : DELIMITING CHARACTER\r\n\
~Well\r\n\
STRT.M  1670.0 : First Index Value\r\n\
NULL.   -999.25 : NULL VALUE\r\n\
~Log_Parameter\r\n\
BS .MM  200.0 : Bit Size\r\n\
~Log_Definition\r\n\
DEPT.M      : Depth\r\n\
DT  .US/M   : Sonic\r\n\
RHOB.K/M3   : Density\r\n\
~Log_Data | Log_Definition\r\n\
1670.000, 123.450, 2550.000\r\n\
1669.875, -999.25, 2550.000\r\n\
~Core_Definition\r\n\
CDEP.M : Core depth\r\n\
POR .% : Porosity\r\n\
~Core_Data | Core_Definition\r\n\
1669.5, 12.5\r\n";

/// LAS 3.0 file that still uses a v2-style CURVE section
pub const LAS3_LEGACY_CURVE: &str = r#"~VERSION INFORMATION
VERS. 3.0 : version
~CURVE INFORMATION
DEPTH.M : depth
GR.GAPI : gamma
~ASCII_DATA | CURVE_DEFINITION
100.0 50.0
100.5 -999.25
"#;

/// Declared 3.0 but laid out like a 2.0 file
pub const LAS3_WITH_V2_LAYOUT: &str = r#"~V
VERS. 3.0 : version
~CURVE INFORMATION
DEPT.M : depth
GR.GAPI : gamma
~A
1.0 2.0
"#;

/// Parse `content` with default settings and a recording sink
pub fn parse(content: &str) -> (Result<ParseResult>, RecordingSink) {
    let mut sink = RecordingSink::new();
    let result = LasParser::default().parse_str(content, Path::new("data/well.las"), &mut sink);
    (result, sink)
}

/// Cleaned lines of `content`
pub fn cleaned(content: &str) -> Vec<String> {
    super::cleaner::clean_lines(content, &mut RecordingSink::new())
}
