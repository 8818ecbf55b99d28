//! Inline single-page client. Everything here is presentation: currency
//! formatting, milestone/reward math, and the mock monthly figures all live
//! in the page's script and never feed back into the store.

pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Intern Portal</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&display=swap');

    :root {
      --bg-1: #eef1fb;
      --bg-2: #dfe6ff;
      --ink: #1f2437;
      --accent: #4f46e5;
      --accent-soft: #eef0ff;
      --good: #16a34a;
      --muted: #6b7280;
      --card: #ffffff;
      --shadow: 0 18px 44px rgba(49, 54, 104, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), var(--bg-2) 70%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 28px 16px 48px;
      display: flex;
      justify-content: center;
    }

    .app {
      width: min(960px, 100%);
      display: grid;
      gap: 22px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    header h1 {
      margin: 0;
      font-size: clamp(1.6rem, 3.5vw, 2.2rem);
    }

    header .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
      font-size: 0.95rem;
    }

    .avatar {
      position: relative;
      height: 52px;
      width: 52px;
      border-radius: 50%;
      background: var(--accent);
      color: white;
      display: grid;
      place-items: center;
      font-size: 1.3rem;
      font-weight: 600;
    }

    .avatar .rank-badge {
      position: absolute;
      top: -6px;
      right: -10px;
      background: linear-gradient(90deg, #f59e0b, #f97316);
      color: white;
      font-size: 0.7rem;
      font-weight: 700;
      padding: 3px 7px;
      border-radius: 999px;
      border: 2px solid white;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: rgba(79, 70, 229, 0.1);
      border-radius: 999px;
      width: fit-content;
    }

    .tab {
      appearance: none;
      background: transparent;
      border: none;
      border-radius: 999px;
      padding: 8px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      color: var(--muted);
      cursor: pointer;
    }

    .tab.active {
      background: white;
      color: var(--accent);
      box-shadow: 0 8px 16px rgba(49, 54, 104, 0.12);
    }

    .card {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 24px;
    }

    .card h2 {
      margin: 0 0 4px;
      font-size: 1.3rem;
    }

    .card h3 {
      margin: 0 0 14px;
      font-size: 1.1rem;
    }

    .referral {
      display: flex;
      align-items: center;
      gap: 10px;
      margin-top: 10px;
    }

    .referral code {
      font-size: 1.05rem;
      font-weight: 600;
      color: var(--accent);
      background: var(--accent-soft);
      padding: 6px 12px;
      border-radius: 10px;
    }

    .referral button {
      appearance: none;
      border: none;
      border-radius: 10px;
      background: var(--accent);
      color: white;
      font-weight: 600;
      padding: 8px 14px;
      cursor: pointer;
    }

    .stat-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(170px, 1fr));
      gap: 14px;
    }

    .stat {
      background: white;
      border: 1px solid rgba(49, 54, 104, 0.08);
      border-radius: 16px;
      padding: 16px;
    }

    .stat .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .stat .value {
      display: block;
      margin-top: 6px;
      font-size: 1.5rem;
      font-weight: 600;
    }

    .bar-track {
      width: 100%;
      height: 10px;
      background: #e5e7eb;
      border-radius: 999px;
      overflow: hidden;
    }

    .bar-fill {
      height: 100%;
      border-radius: 999px;
      background: linear-gradient(90deg, var(--accent), #9333ea);
      transition: width 400ms ease;
    }

    .progress-meta {
      display: flex;
      justify-content: space-between;
      font-size: 0.85rem;
      color: var(--muted);
      margin-bottom: 8px;
    }

    .progress-hint {
      margin: 10px 0 0;
      font-size: 0.85rem;
      color: var(--muted);
    }

    .reward-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 14px;
    }

    .reward {
      position: relative;
      border: 2px solid #e5e7eb;
      border-radius: 16px;
      padding: 14px;
      background: #f9fafb;
    }

    .reward.achieved {
      border-color: #86efac;
      background: #f0fdf4;
    }

    .reward.next {
      border-color: #c7d2fe;
      background: var(--accent-soft);
    }

    .reward .flag {
      position: absolute;
      top: -10px;
      right: 10px;
      font-size: 0.7rem;
      font-weight: 700;
      color: white;
      padding: 3px 8px;
      border-radius: 999px;
    }

    .reward.achieved .flag {
      background: var(--good);
    }

    .reward.next .flag {
      background: var(--accent);
    }

    .reward .head {
      display: flex;
      align-items: center;
      gap: 10px;
      margin-bottom: 8px;
    }

    .reward .head .icon {
      font-size: 1.5rem;
    }

    .reward .head h4 {
      margin: 0;
      font-size: 0.95rem;
    }

    .reward .head p {
      margin: 2px 0 0;
      font-size: 0.8rem;
      color: var(--muted);
    }

    .reward .status {
      margin-top: 8px;
      font-size: 0.78rem;
      color: var(--muted);
    }

    .board-row {
      display: grid;
      grid-template-columns: 44px 1fr;
      gap: 12px;
      align-items: center;
      padding: 10px 0;
      border-bottom: 1px solid #f3f4f6;
    }

    .board-row:last-child {
      border-bottom: none;
    }

    .board-rank {
      font-size: 1.2rem;
      text-align: center;
    }

    .board-main .line {
      display: flex;
      justify-content: space-between;
      font-size: 0.95rem;
      margin-bottom: 6px;
    }

    .board-main .line .who {
      font-weight: 600;
    }

    .board-main .line .meta {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .board-row.me .board-main .line .who {
      color: var(--accent);
    }

    .detail-list {
      display: grid;
      gap: 10px;
    }

    .detail-list .row {
      display: flex;
      justify-content: space-between;
      padding: 10px 0;
      border-bottom: 1px solid #f3f4f6;
      font-size: 0.95rem;
    }

    .detail-list .row:last-child {
      border-bottom: none;
    }

    .detail-list .row .k {
      color: var(--muted);
    }

    .status-line {
      min-height: 1.2em;
      font-size: 0.9rem;
      color: var(--muted);
    }

    .status-line[data-type="error"] {
      color: #dc2626;
    }

    .status-line[data-type="ok"] {
      color: var(--good);
    }

    section[hidden] {
      display: none;
    }

    @media (max-width: 620px) {
      .card {
        padding: 18px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Intern Portal</h1>
        <p class="subtitle">Donation tracking dashboard</p>
      </div>
      <div class="avatar">
        <span id="avatar-initial">?</span>
        <span class="rank-badge" id="avatar-rank">#-</span>
      </div>
    </header>

    <nav class="tabs" role="tablist">
      <button class="tab active" type="button" data-tab="dashboard" role="tab" aria-selected="true">Dashboard</button>
      <button class="tab" type="button" data-tab="leaderboard" role="tab" aria-selected="false">Leaderboard</button>
      <button class="tab" type="button" data-tab="profile" role="tab" aria-selected="false">Profile</button>
    </nav>

    <section id="panel-dashboard">
      <div class="card" style="margin-bottom: 18px;">
        <h2 id="welcome">Welcome back!</h2>
        <p class="subtitle">Keep up the great work! You're making a real difference.</p>
        <div class="referral">
          <span class="subtitle">Referral code</span>
          <code id="referral-code">------</code>
          <button id="copy-referral" type="button">Copy</button>
        </div>
      </div>

      <div class="stat-grid" style="margin-bottom: 18px;">
        <div class="stat">
          <span class="label">Total donations</span>
          <span class="value" id="stat-total">--</span>
        </div>
        <div class="stat">
          <span class="label">This month</span>
          <span class="value" id="stat-month">--</span>
        </div>
        <div class="stat">
          <span class="label">Referrals</span>
          <span class="value" id="stat-referrals">--</span>
        </div>
        <div class="stat">
          <span class="label">Current rank</span>
          <span class="value" id="stat-rank">--</span>
        </div>
      </div>

      <div class="card" style="margin-bottom: 18px;">
        <h3>Progress to next milestone</h3>
        <div class="progress-meta">
          <span id="progress-current">Current: --</span>
          <span id="progress-target">Target: --</span>
        </div>
        <div class="bar-track"><div class="bar-fill" id="progress-bar" style="width: 0%"></div></div>
        <p class="progress-hint" id="progress-hint"></p>
      </div>

      <div class="card">
        <h3>Rewards &amp; unlockables</h3>
        <div class="reward-grid" id="rewards"></div>
      </div>
    </section>

    <section id="panel-leaderboard" hidden>
      <div class="card" style="margin-bottom: 18px;">
        <h3>Top fundraisers</h3>
        <div id="board-rows"></div>
      </div>
      <div class="stat-grid">
        <div class="stat">
          <span class="label">Total raised</span>
          <span class="value" id="board-total">--</span>
        </div>
        <div class="stat">
          <span class="label">Average per intern</span>
          <span class="value" id="board-average">--</span>
        </div>
        <div class="stat">
          <span class="label">Participants</span>
          <span class="value" id="board-count">--</span>
        </div>
      </div>
    </section>

    <section id="panel-profile" hidden>
      <div class="card" style="margin-bottom: 18px;">
        <h3>Account</h3>
        <div class="detail-list" id="profile-details"></div>
      </div>
      <div class="stat-grid">
        <div class="stat">
          <span class="label">This month</span>
          <span class="value" id="profile-this-month">--</span>
        </div>
        <div class="stat">
          <span class="label">Last month</span>
          <span class="value" id="profile-last-month">--</span>
        </div>
      </div>
    </section>

    <div class="status-line" id="status"></div>
  </main>

  <script>
    const MILESTONES = [5000, 10000, 15000, 25000, 50000];
    const REWARDS = [
      { amount: 5000, badge: 'Bronze Badge', icon: '🥉', description: 'First milestone achieved!' },
      { amount: 10000, badge: 'Silver Badge', icon: '🥈', description: "You're making great progress!" },
      { amount: 15000, badge: 'Gold Badge', icon: '🥇', description: 'Outstanding performance!' },
      { amount: 25000, badge: 'Platinum Badge', icon: '💎', description: 'Elite level reached!' },
      { amount: 50000, badge: 'Diamond Badge', icon: '💎', description: 'Legendary status!' }
    ];
    const MEDALS = ['🥇', '🥈', '🥉'];

    const statusEl = document.getElementById('status');
    const tabs = Array.from(document.querySelectorAll('.tab'));
    const panels = {
      dashboard: document.getElementById('panel-dashboard'),
      leaderboard: document.getElementById('panel-leaderboard'),
      profile: document.getElementById('panel-profile')
    };

    let user = null;
    let leaderboard = [];

    const inr = new Intl.NumberFormat('en-IN', {
      style: 'currency',
      currency: 'INR',
      minimumFractionDigits: 0
    });
    const money = (amount) => inr.format(Number(amount) || 0);

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const nextMilestone = (total) => {
      return MILESTONES.find((m) => m > total) || MILESTONES[MILESTONES.length - 1];
    };

    const pct = (current, target) => Math.min((current / target) * 100, 100);

    const escapeHtml = (text) => {
      const div = document.createElement('div');
      div.textContent = String(text);
      return div.innerHTML;
    };

    const renderDashboard = () => {
      const total = Number(user.totalDonations) || 0;
      document.getElementById('welcome').textContent = `Welcome back, ${user.name}! 👋`;
      document.getElementById('referral-code').textContent = user.referralCode || '------';
      document.getElementById('avatar-initial').textContent = (user.name || '?').charAt(0).toUpperCase();
      document.getElementById('avatar-rank').textContent = `#${user.rank}`;
      document.getElementById('stat-total').textContent = money(total);
      document.getElementById('stat-month').textContent = money(user.thisMonth);
      document.getElementById('stat-referrals').textContent = user.referrals;
      document.getElementById('stat-rank').textContent = `#${user.rank}`;

      const target = nextMilestone(total);
      document.getElementById('progress-current').textContent = `Current: ${money(total)}`;
      document.getElementById('progress-target').textContent = `Target: ${money(target)}`;
      document.getElementById('progress-bar').style.width = `${pct(total, target)}%`;
      document.getElementById('progress-hint').textContent =
        total >= target
          ? 'Top milestone reached!'
          : `${money(target - total)} more to reach the next milestone!`;

      const nextIndex = REWARDS.findIndex((reward) => total < reward.amount);
      document.getElementById('rewards').innerHTML = REWARDS.map((reward, index) => {
        const achieved = total >= reward.amount;
        const isNext = index === nextIndex;
        const cls = achieved ? 'achieved' : isNext ? 'next' : '';
        const flag = achieved
          ? '<span class="flag">✓ Achieved</span>'
          : isNext
          ? '<span class="flag">Next target</span>'
          : '';
        const status = achieved
          ? '✓ Unlocked'
          : isNext
          ? `${money(reward.amount - total)} more to unlock`
          : 'Locked - complete previous milestone first';
        return `
          <div class="reward ${cls}">
            ${flag}
            <div class="head">
              <span class="icon">${reward.icon}</span>
              <div>
                <h4>${reward.badge}</h4>
                <p>${money(reward.amount)}</p>
              </div>
            </div>
            <div class="bar-track"><div class="bar-fill" style="width: ${pct(total, reward.amount)}%"></div></div>
            <div class="status">${status}</div>
          </div>
        `;
      }).join('');
    };

    const renderLeaderboard = () => {
      const rows = Array.isArray(leaderboard) ? leaderboard : [];
      if (!rows.length) {
        document.getElementById('board-rows').innerHTML =
          '<p class="subtitle">No leaderboard data yet.</p>';
        return;
      }

      const maxAmount = Math.max(...rows.map((row) => Number(row.amount) || 0), 1);
      const total = rows.reduce((sum, row) => sum + (Number(row.amount) || 0), 0);

      document.getElementById('board-rows').innerHTML = rows.map((row) => {
        const amount = Number(row.amount) || 0;
        const width = (amount / maxAmount) * 100;
        const medal = row.rank >= 1 && row.rank <= 3 ? MEDALS[row.rank - 1] : `#${row.rank}`;
        const mine = user && row.name === user.name ? ' me' : '';
        return `
          <div class="board-row${mine}">
            <div class="board-rank">${medal}</div>
            <div class="board-main">
              <div class="line">
                <span class="who">${escapeHtml(row.name)}</span>
                <span class="meta">${money(amount)} · ${row.referrals} referrals</span>
              </div>
              <div class="bar-track"><div class="bar-fill" style="width: ${width.toFixed(1)}%"></div></div>
            </div>
          </div>
        `;
      }).join('');

      document.getElementById('board-total').textContent = money(total);
      document.getElementById('board-average').textContent = money(Math.round(total / rows.length));
      document.getElementById('board-count').textContent = rows.length;
    };

    const renderProfile = () => {
      const details = [
        ['Name', user.name],
        ['Email', user.email],
        ['Referral code', user.referralCode],
        ['Rank', `#${user.rank}`],
        ['Referrals', user.referrals],
        ['Total donations', money(user.totalDonations)]
      ];
      document.getElementById('profile-details').innerHTML = details
        .map(([k, v]) => `<div class="row"><span class="k">${k}</span><span>${escapeHtml(v)}</span></div>`)
        .join('');
      document.getElementById('profile-this-month').textContent = money(user.thisMonth);
      document.getElementById('profile-last-month').textContent = money(user.lastMonth);
    };

    const renderAll = () => {
      if (!user) {
        return;
      }
      renderDashboard();
      renderLeaderboard();
      renderProfile();
    };

    const setActiveTab = (tab) => {
      tabs.forEach((button) => {
        const isActive = button.dataset.tab === tab;
        button.classList.toggle('active', isActive);
        button.setAttribute('aria-selected', String(isActive));
      });
      Object.entries(panels).forEach(([name, panel]) => {
        panel.hidden = name !== tab;
      });
    };

    const fetchJson = async (path) => {
      const res = await fetch(path);
      if (!res.ok) {
        throw new Error(`Request to ${path} failed`);
      }
      return res.json();
    };

    const load = async () => {
      setStatus('Loading...', '');
      const [userData, boardData] = await Promise.all([
        fetchJson('/api/user'),
        fetchJson('/api/leaderboard')
      ]);
      user = {
        ...userData,
        // Monthly figures are not tracked server-side; mock them when absent.
        thisMonth: userData.thisMonth ?? Math.floor(Math.random() * 5000) + 1000,
        lastMonth: userData.lastMonth ?? Math.floor(Math.random() * 4000) + 800
      };
      leaderboard = boardData;
      renderAll();
      setStatus('', '');
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => setActiveTab(button.dataset.tab));
    });

    document.getElementById('copy-referral').addEventListener('click', async () => {
      if (!user || !user.referralCode) {
        return;
      }
      try {
        await navigator.clipboard.writeText(user.referralCode);
        setStatus('Referral code copied to clipboard', 'ok');
      } catch (err) {
        setStatus('Clipboard unavailable', 'error');
      }
      setTimeout(() => setStatus('', ''), 1500);
    });

    load().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"##;
