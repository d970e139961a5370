use std::collections::HashMap;

// Monoisotopic Atomic Weights
pub fn atomic_weights_mono_isotopic() -> HashMap<&'static str, f64> {
    let mut map = HashMap::new();
    map.insert("H", 1.00782503223);
    map.insert("He", 4.00260325415);
    map.insert("Li", 7.0160034366);
    map.insert("Be", 9.012183065);
    map.insert("B", 11.00930536);
    map.insert("C", 12.0000000);
    map.insert("N", 14.00307400443);
    map.insert("O", 15.99491461957);
    map.insert("F", 18.99840316273);
    map.insert("Ne", 19.9924401762);
    map.insert("Na", 22.9897692820);
    map.insert("Mg", 23.985041697);
    map.insert("Al", 26.98153853);
    map.insert("Si", 27.97692653465);
    map.insert("P", 30.97376199842);
    map.insert("S", 31.9720711744);
    map.insert("Cl", 34.968852682);
    map.insert("Ar", 39.9623831237);
    map.insert("K", 38.963706679);
    map.insert("Ca", 39.96259098);
    map.insert("Sc", 44.95590828);
    map.insert("Ti", 47.9479463);
    map.insert("V", 50.9439595);
    map.insert("Cr", 51.9405075);
    map.insert("Mn", 54.9380455);
    map.insert("Fe", 55.9349375);
    map.insert("Co", 58.9331955);
    map.insert("Ni", 57.9353429);
    map.insert("Cu", 62.9295975);
    map.insert("Zn", 63.9291422);
    map.insert("Ga", 68.9255735);
    map.insert("Ge", 73.9211778);
    map.insert("As", 74.9215965);
    map.insert("Se", 79.9165218);
    map.insert("Br", 78.9183376);
    map.insert("Kr", 83.911507);
    map.insert("Rb", 84.9117893);
    map.insert("Sr", 87.9056125);
    map.insert("Y", 88.905842);
    map.insert("Zr", 89.9046977);
    map.insert("Nb", 92.906373);
    map.insert("Mo", 97.905404);
    map.insert("Tc", 98.0);
    map.insert("Ru", 101.904349);
    map.insert("Rh", 102.905504);
    map.insert("Pd", 105.903485);
    map.insert("Ag", 106.905093);
    map.insert("Cd", 113.903358);
    map.insert("In", 114.903878);
    map.insert("Sn", 119.902199);
    map.insert("Sb", 120.903818);
    map.insert("Te", 129.906224);
    map.insert("I", 126.904473);
    map.insert("Xe", 131.904155);
    map.insert("Cs", 132.905447);
    map.insert("Ba", 137.905247);
    map.insert("La", 138.906355);
    map.insert("Ce", 139.905442);
    map.insert("Pr", 140.907662);
    map.insert("Nd", 141.907732);
    map.insert("Sm", 151.919728);
    map.insert("Eu", 152.921225);
    map.insert("Gd", 157.924103);
    map.insert("Tb", 158.925346);
    map.insert("Dy", 163.929171);
    map.insert("Ho", 164.930319);
    map.insert("Er", 165.930290);
    map.insert("Tm", 168.934211);
    map.insert("Yb", 173.938859);
    map.insert("Lu", 174.940770);
    map.insert("Hf", 179.946550);
    map.insert("Ta", 180.947992);
    map.insert("W", 183.950932);
    map.insert("Re", 186.955744);
    map.insert("Os", 191.961467);
    map.insert("Ir", 192.962917);
    map.insert("Pt", 194.964766);
    map.insert("Au", 196.966543);
    map.insert("Hg", 201.970617);
    map.insert("Tl", 204.974427);
    map.insert("Pb", 207.976627);
    map.insert("Bi", 208.980384);
    map.insert("Th", 232.038054);
    map.insert("U", 238.050786);

    map
}
