/// Format seconds the way the timer displays them: `ss` below a minute,
/// `m:ss` from one minute on.
pub fn format_time(secs: u32) -> String {
    let minutes = secs / 60;
    let seconds = secs % 60;

    match minutes {
        0 => format!("{seconds:02}"),
        m => format!("{m}:{seconds:02}"),
    }
}

pub fn mean(data: &[u32]) -> Option<f64> {
    match data.len() {
        0 => None,
        count => Some(data.iter().map(|&v| f64::from(v)).sum::<f64>() / count as f64),
    }
}

pub fn std_dev(data: &[u32]) -> Option<f64> {
    let data_mean = mean(data)?;
    let variance = data
        .iter()
        .map(|&value| {
            let diff = data_mean - f64::from(value);

            diff * diff
        })
        .sum::<f64>()
        / data.len() as f64;

    Some(variance.sqrt())
}
