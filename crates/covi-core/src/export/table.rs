use std::io::Write;

use csv::{Terminator, Writer, WriterBuilder};

use super::{ExportError, TIME_DIGITS, format_fixed};
use crate::records::force::ForceSeries;
use crate::records::pressure::PressureFrame;

pub const PRESSURE_HEADER: &str = "Pressure [N/cm2]";
pub const FORCE_HEADER: [&str; 2] = ["Time [s]", "Force [N]"];

fn csv_writer<W: Write>(out: W) -> Writer<W> {
    WriterBuilder::new()
        .delimiter(b';')
        .quote(b'"')
        .terminator(Terminator::CRLF)
        .from_writer(out)
}

/// One column per frame: header, `Dims H x W`, then row-major values.
///
/// Frames with fewer values than the largest one leave their remaining cells
/// empty. Nothing is written for an empty frame list.
pub fn write_pressure_csv<W: Write>(
    frames: &[PressureFrame],
    digits: usize,
    out: W,
) -> Result<(), ExportError> {
    if frames.is_empty() {
        return Ok(());
    }
    let mut writer = csv_writer(out);
    writer.write_record(frames.iter().map(|_| PRESSURE_HEADER))?;
    writer.write_record(
        frames
            .iter()
            .map(|frame| format!("Dims {} x {}", frame.height, frame.width)),
    )?;

    let rows = frames.iter().map(PressureFrame::flat_len).max().unwrap_or(0);
    for k in 0..rows {
        writer.write_record(frames.iter().map(|frame| {
            frame
                .flat_value(k)
                .map(|value| format_fixed(value, digits))
                .unwrap_or_default()
        }))?;
    }
    writer.flush()?;
    Ok(())
}

/// Two columns per series: elapsed seconds and the integer sample.
pub fn write_force_csv<W: Write>(series: &[ForceSeries], out: W) -> Result<(), ExportError> {
    let Some(first) = series.first() else {
        return Ok(());
    };
    let mut writer = csv_writer(out);
    writer.write_record(series.iter().flat_map(|_| FORCE_HEADER))?;

    for i in 0..first.len() {
        let time = format_fixed(ForceSeries::time_at(i), TIME_DIGITS);
        let mut record = Vec::with_capacity(series.len() * 2);
        for entry in series {
            record.push(time.clone());
            record.push(
                entry
                    .samples
                    .get(i)
                    .map(|sample| sample.to_string())
                    .unwrap_or_default(),
            );
        }
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{write_force_csv, write_pressure_csv};
    use crate::records::force::ForceSeries;
    use crate::records::pressure::PressureFrame;

    fn frame(height: i16, width: i16, start: f64) -> PressureFrame {
        let rows = (0..height)
            .map(|i| {
                (0..width)
                    .map(|j| start + f64::from(i * width + j))
                    .collect()
            })
            .collect();
        PressureFrame {
            height,
            width,
            rows,
        }
    }

    fn render_pressure(frames: &[PressureFrame], digits: usize) -> Vec<String> {
        let mut out = Vec::new();
        write_pressure_csv(frames, digits, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn pressure_single_frame() {
        let frame = PressureFrame {
            height: 2,
            width: 2,
            rows: vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        };
        let lines = render_pressure(&[frame], 2);
        assert_eq!(
            lines,
            vec!["Pressure [N/cm2]", "Dims 2 x 2", "1.00", "2.00", "3.00", "4.00"]
        );
    }

    #[test]
    fn pressure_ragged_frames_leave_blanks() {
        let lines = render_pressure(&[frame(2, 2, 0.0), frame(2, 3, 10.0)], 1);
        assert_eq!(lines.len(), 2 + 6);
        assert_eq!(lines[0], "Pressure [N/cm2];Pressure [N/cm2]");
        assert_eq!(lines[1], "Dims 2 x 2;Dims 2 x 3");
        assert_eq!(lines[2], "0.0;10.0");
        assert_eq!(lines[5], "3.0;13.0");
        assert_eq!(lines[6], ";14.0");
        assert_eq!(lines[7], ";15.0");
    }

    #[test]
    fn pressure_rows_end_with_crlf() {
        let mut out = Vec::new();
        write_pressure_csv(&[frame(1, 1, 0.5)], 2, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Pressure [N/cm2]\r\nDims 1 x 1\r\n0.50\r\n"
        );
    }

    #[test]
    fn pressure_empty_set_writes_nothing() {
        assert!(render_pressure(&[], 2).is_empty());
    }

    #[test]
    fn force_columns_per_series() {
        let a = ForceSeries {
            samples: vec![5, -3, 0],
        };
        let b = ForceSeries {
            samples: vec![100, 200, 300],
        };
        let mut out = Vec::new();
        write_force_csv(&[a, b], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Time [s];Force [N];Time [s];Force [N]");
        assert_eq!(lines[1], "0.000;5;0.000;100");
        assert_eq!(lines[2], "0.001;-3;0.001;200");
        assert_eq!(lines[3], "0.002;0;0.002;300");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn force_rows_end_with_crlf() {
        let series = ForceSeries {
            samples: vec![4, -1],
        };
        let mut out = Vec::new();
        write_force_csv(&[series], &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Time [s];Force [N]\r\n0.000;4\r\n0.001;-1\r\n"
        );
    }

    #[test]
    fn force_full_length_times() {
        let series = ForceSeries {
            samples: vec![1; 5000],
        };
        let mut out = Vec::new();
        write_force_csv(&[series], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5001);
        assert_eq!(lines[5000], "4.999;1");
    }
}
